use crate::leads::form::LeadForm;
use crate::leads::LeadError;
use async_trait::async_trait;

/// Destination for validated leads
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver one lead; any error is reported to the visitor, never retried
    async fn send(&self, lead: &LeadForm) -> Result<(), LeadError>;

    fn destination(&self) -> &str;
}
