pub mod form;
pub mod http;
pub mod service;
pub mod traits;

pub use form::{Field, FieldErrors, LeadForm};
pub use http::HttpLeadSink;
pub use service::{LeadService, SubmissionReceipt};
pub use traits::LeadSink;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("invalid fields: {0}")]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    InFlight,
    #[error("lead endpoint returned status {status}")]
    Server { status: u16 },
    #[error("could not reach lead endpoint: {0}")]
    Network(#[from] reqwest::Error),
}

impl LeadError {
    /// Message shown to the visitor; delivery failures point to the phone line
    pub fn user_message(&self, phone: &str) -> String {
        match self {
            LeadError::Invalid(_) => "Please correct the highlighted fields and try again.".to_string(),
            LeadError::InFlight => "Your message is already being sent.".to_string(),
            LeadError::Server { .. } | LeadError::Network(_) => format!(
                "Sorry, we couldn't send your message. Please try again or call us at {}.",
                phone
            ),
        }
    }
}
