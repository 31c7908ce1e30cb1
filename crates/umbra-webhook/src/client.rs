//! HTTP client for the consultation webhook

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, info, warn};
use umbra_core::ConsultationRecord;

use crate::error::SubmissionError;
use crate::payload::WebhookPayload;
use crate::response::{extract_error_message, extract_report};

/// Endpoint the consultation is posted to unless configured otherwise
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.srv880021.hstgr.cloud/webhook-test/Legal-Inmo";

/// Identifier added to every payload
pub const DEFAULT_SYSTEM_TAG: &str = "UMBRA Legal Analysis v1.0";

pub const DEFAULT_USER_AGENT: &str = "UMBRA-Legal-System/1.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout: Duration,
    pub system_tag: String,
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            system_tag: DEFAULT_SYSTEM_TAG.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl WebhookConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Posts consultations and interprets the answer as a report
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SubmissionError::client(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// POST the consultation and return the report text.
    ///
    /// One request, no retry. 2xx bodies always produce a report (falling
    /// back to the raw body); anything else is a [`SubmissionError`].
    pub async fn submit(&self, record: &ConsultationRecord) -> Result<String, SubmissionError> {
        let payload = WebhookPayload::new(record, &self.config.system_tag);

        info!(url = %self.config.url, "Sending consultation to webhook");
        if let Ok(body) = serde_json::to_string_pretty(&payload) {
            debug!("Webhook payload:\n{}", body);
        }

        let response = self
            .http
            .post(&self.config.url)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Webhook request failed: {}", e);
                SubmissionError::from_reqwest(&e, self.config.timeout)
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        info!(status = status.as_u16(), content_type = ?content_type, "Webhook responded");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                warn!("Timed out reading webhook body: {}", e);
                return Err(SubmissionError::Timeout {
                    timeout: self.config.timeout,
                });
            }
            Err(e) => {
                warn!("Failed to read webhook body: {}", e);
                String::new()
            }
        };

        if status.is_success() {
            debug!("Webhook body ({} bytes)", body.len());
            Ok(extract_report(content_type.as_deref(), &body))
        } else {
            let message = extract_error_message(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                &body,
            );
            warn!(status = status.as_u16(), "Webhook error: {}", message);
            Err(SubmissionError::server(status.as_u16(), message))
        }
    }

    /// Send an `OPTIONS` request to check the endpoint is reachable.
    ///
    /// Returns the status code; the caller only logs it.
    pub async fn probe(&self) -> Result<u16, SubmissionError> {
        debug!(url = %self.config.url, "Probing webhook");
        let response = self
            .http
            .request(Method::OPTIONS, &self.config.url)
            .header("Origin", "umbra-tui")
            .send()
            .await
            .map_err(|e| SubmissionError::from_reqwest(&e, self.config.timeout))?;

        Ok(response.status().as_u16())
    }
}
