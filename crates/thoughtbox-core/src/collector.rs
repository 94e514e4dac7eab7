//! HTTP client for the collector endpoint.

use anyhow::Result;
use reqwest::StatusCode;
use url::Url;

use crate::config::CollectorConfig;
use crate::form::Complaint;

/// Posts complaints to a single collector URL.
#[derive(Debug, Clone)]
pub struct CollectorClient {
    url: Url,
    http: reqwest::Client,
}

impl CollectorClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    /// Builds a client from config.
    ///
    /// # Errors
    /// Returns an error if the configured URL is invalid.
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        Ok(Self::new(config.endpoint()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends one POST with a JSON body and returns the response status.
    ///
    /// The body is serialized through `reqwest`'s JSON support, which also sets
    /// `Content-Type: application/json`. The response body is ignored.
    ///
    /// # Errors
    /// Returns the transport error when no response was received.
    pub async fn post(&self, complaint: &Complaint) -> Result<StatusCode, reqwest::Error> {
        let response = self
            .http
            .post(self.url.clone())
            .json(complaint)
            .send()
            .await?;
        Ok(response.status())
    }
}
