use crate::config::SiteConfig;
use crate::leads::form::LeadForm;
use crate::leads::traits::LeadSink;
use crate::leads::LeadError;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Posts leads as JSON to the site's lead endpoint
pub struct HttpLeadSink {
    client: Client,
    endpoint: String,
}

impl HttpLeadSink {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("turnberry-place/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.leads_endpoint.clone(),
        })
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    async fn send(&self, lead: &LeadForm) -> Result<(), LeadError> {
        debug!("POST {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(lead).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Lead endpoint returned status: {}", status);
            return Err(LeadError::Server { status: status.as_u16() });
        }
        Ok(())
    }

    fn destination(&self) -> &str {
        &self.endpoint
    }
}
