//! Web3Forms submission sink.
//!
//! Delivers a completed [`SubmitPayload`] as one JSON POST to the Web3Forms
//! endpoint: the access token plus every flattened field at the top level of
//! the body. Success is judged solely by the HTTP status; the response body
//! is not interpreted.

use async_trait::async_trait;
use intake_wizard::{SubmitError, SubmitPayload, SubmitSink};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// The hosted Web3Forms intake endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// HTTP sink posting submissions to Web3Forms.
#[derive(Debug, Clone)]
pub struct Web3FormsSink {
    http: Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsSink {
    /// Create a sink for the hosted endpoint with the given access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: access_key.into(),
        }
    }

    /// Override the endpoint URL (self-hosted relay, test stub).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the JSON body: access key, optional subject and from_name,
    /// then every field under its export name.
    fn body(&self, payload: &SubmitPayload) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert(
            "access_key".to_string(),
            Value::String(self.access_key.clone()),
        );
        if let Some(subject) = &payload.subject {
            body.insert("subject".to_string(), Value::String(subject.clone()));
        }
        if let Some(from_name) = &payload.from_name {
            body.insert("from_name".to_string(), Value::String(from_name.clone()));
        }
        for (name, value) in &payload.fields {
            body.insert(name.clone(), Value::String(value.clone()));
        }
        body
    }
}

#[async_trait]
impl SubmitSink for Web3FormsSink {
    async fn submit(&self, payload: &SubmitPayload) -> Result<(), SubmitError> {
        let body = self.body(payload);
        debug!(endpoint = %self.endpoint, fields = payload.fields.len(), "posting intake submission");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(%err, "submission transport failed");
                SubmitError::transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "submission endpoint rejected the record");
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_layout() {
        let sink = Web3FormsSink::new("key-123");
        let payload = SubmitPayload {
            subject: Some("New Application: Agni Labs".to_string()),
            from_name: Some("Asha Rao".to_string()),
            fields: vec![
                ("Founder Name".to_string(), "Asha Rao".to_string()),
                ("Website".to_string(), "Not provided".to_string()),
            ],
        };

        let body = sink.body(&payload);
        assert_eq!(body["access_key"], "key-123");
        assert_eq!(body["subject"], "New Application: Agni Labs");
        assert_eq!(body["from_name"], "Asha Rao");
        assert_eq!(body["Founder Name"], "Asha Rao");
        assert_eq!(body["Website"], "Not provided");
    }

    #[test]
    fn subject_omitted_when_unset() {
        let sink = Web3FormsSink::new("key-123");
        let payload = SubmitPayload {
            subject: None,
            from_name: None,
            fields: Vec::new(),
        };
        let body = sink.body(&payload);
        assert!(!body.contains_key("subject"));
        assert!(!body.contains_key("from_name"));
    }
}
