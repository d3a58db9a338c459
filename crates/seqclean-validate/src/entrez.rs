//! NCBI E-utilities ESummary client.
//!
//! Implements [`LookupService`] against the ESummary endpoint. A batch is
//! submitted as a comma-joined `id` parameter; the payload itself is opaque
//! to the validator, only success/failure (and the failure message) matter.

use std::time::Duration;

use reqwest::blocking::Client;
use seqclean_model::LookupError;
use serde_json::Value;
use tracing::debug;

use crate::lookup::LookupService;

/// E-utilities base URL.
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// HTTP request timeout for ESummary calls. A timeout surfaces as a
/// network error, which the validator treats as an ambiguous failure.
pub const ESUMMARY_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the E-utilities service.
#[derive(Debug, Clone)]
pub struct EntrezConfig {
    /// Target database, e.g. `protein`.
    pub db: String,
    /// Contact email, required by NCBI usage policy.
    pub email: String,
    /// API key; raises the polite rate limit when present.
    pub api_key: Option<String>,
    /// Base URL, overridable for testing against a local stub.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl EntrezConfig {
    /// Config for the protein database with the given contact email.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            db: "protein".to_string(),
            email: email.into(),
            api_key: None,
            base_url: EUTILS_BASE_URL.to_string(),
            timeout: ESUMMARY_TIMEOUT,
        }
    }

    /// Set the target database.
    #[must_use]
    pub fn with_db(mut self, db: impl Into<String>) -> Self {
        self.db = db.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Blocking ESummary client.
pub struct EntrezLookup {
    client: Client,
    config: EntrezConfig,
}

impl EntrezLookup {
    /// Build a client with the configured timeout.
    pub fn new(config: EntrezConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| LookupError::Network(error.to_string()))?;
        Ok(Self { client, config })
    }

    fn esummary_url(&self) -> String {
        format!("{}/esummary.fcgi", self.config.base_url)
    }

    /// One ESummary call for a comma-joined id list.
    fn esummary(&self, ids: &str) -> Result<(), LookupError> {
        debug!(db = %self.config.db, ids = %ids, "esummary request");

        let mut request = self.client.get(self.esummary_url()).query(&[
            ("db", self.config.db.as_str()),
            ("id", ids),
            ("retmode", "json"),
            ("tool", "seqclean"),
            ("email", self.config.email.as_str()),
        ]);
        if let Some(api_key) = &self.config.api_key {
            request = request.query(&[("api_key", api_key.as_str())]);
        }

        let response = request
            .send()
            .map_err(|error| LookupError::Network(error.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|error| LookupError::Network(error.to_string()))?;

        classify_response(status, &body)
    }
}

/// Classify one ESummary response into success or a typed lookup error.
///
/// ESummary reports bad uids inside a 200 payload, either as a top-level
/// `error` field or as a per-uid error entry under `result`. Per-uid errors
/// are rephrased as `Invalid uid <uid> (<message>)` so the default failure
/// classifier can name the offender.
fn classify_response(status: u16, body: &str) -> Result<(), LookupError> {
    if !(200..300).contains(&status) {
        return Err(LookupError::Http {
            status,
            message: body.trim().to_string(),
        });
    }

    let payload: Value = serde_json::from_str(body)
        .map_err(|error| LookupError::Service(format!("malformed response: {error}")))?;
    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return Err(LookupError::Service(message.to_string()));
    }
    if let Some(result) = payload.get("result").and_then(Value::as_object) {
        for (uid, entry) in result {
            if uid == "uids" {
                continue;
            }
            if let Some(message) = entry.get("error").and_then(Value::as_str) {
                return Err(LookupError::Service(format!(
                    "Invalid uid {uid} ({message})"
                )));
            }
        }
    }
    Ok(())
}

impl LookupService for EntrezLookup {
    fn lookup_batch(&self, identifiers: &[String]) -> Result<(), LookupError> {
        self.esummary(&identifiers.join(","))
    }

    fn lookup_single(&self, identifier: &str) -> Result<(), LookupError> {
        self.esummary(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esummary_url_uses_configured_base() {
        let config = EntrezConfig::new("curator@example.org")
            .with_base_url("http://127.0.0.1:9999/eutils");
        let client = EntrezLookup::new(config).unwrap();
        assert_eq!(
            client.esummary_url(),
            "http://127.0.0.1:9999/eutils/esummary.fcgi"
        );
    }

    #[test]
    fn default_config_targets_protein_db() {
        let config = EntrezConfig::new("curator@example.org");
        assert_eq!(config.db, "protein");
        assert_eq!(config.base_url, EUTILS_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn client_creation() {
        let client = EntrezLookup::new(EntrezConfig::new("curator@example.org"));
        assert!(client.is_ok());
    }

    #[test]
    fn clean_payload_is_success() {
        let body = r#"{"header":{"type":"esummary","version":"0.3"},
            "result":{"uids":["47118297"],"47118297":{"uid":"47118297","title":"spike"}}}"#;
        assert!(classify_response(200, body).is_ok());
    }

    #[test]
    fn http_error_status_carries_body() {
        let error = classify_response(429, "API rate limit exceeded\n").unwrap_err();
        match error {
            LookupError::Http { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn top_level_error_field_becomes_service_error() {
        let body = r#"{"error":"Otherdb uid=\"47118297\" db=\"nuccore\""}"#;
        let error = classify_response(200, body).unwrap_err();
        match error {
            LookupError::Service(message) => {
                assert_eq!(message, r#"Otherdb uid="47118297" db="nuccore""#);
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn per_uid_error_names_the_offender() {
        let body = r#"{"result":{"uids":["NP_000001.1","AAA_28"],
            "NP_000001.1":{"uid":"NP_000001.1","title":"alpha"},
            "AAA_28":{"error":"cannot get document summary"}}}"#;
        let error = classify_response(200, body).unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid uid AAA_28 (cannot get document summary)"
        );
    }

    #[test]
    fn malformed_payload_is_a_service_error() {
        let error = classify_response(200, "<html>busy</html>").unwrap_err();
        assert!(matches!(error, LookupError::Service(_)));
        assert!(error.message().starts_with("malformed response"));
    }
}
