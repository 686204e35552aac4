use tracing::{debug, instrument};

use crate::convert::{build_request_body, parse_brief};
use crate::error::BriefingError;
use crate::types::{BriefingRequest, MeetingBrief};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Client for generating meeting briefs through the OpenRouter API.
pub struct BriefingClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl BriefingClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model used for generation.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generates a meeting brief.
    ///
    /// Transport, API and parse failures all surface as errors; callers
    /// that must stay up substitute [`MeetingBrief::fallback`].
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate(&self, request: &BriefingRequest) -> Result<MeetingBrief, BriefingError> {
        let body = build_request_body(&self.model, request);

        debug!("Sending briefing request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let message = response_body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(BriefingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Received briefing response");

        parse_brief(&response_body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BriefingClient::new("test-key");
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_client_custom_base_url_and_model() {
        let client = BriefingClient::with_base_url("test-key", "https://custom.api.com")
            .with_model("openai/gpt-4o-mini");
        assert_eq!(client.base_url, "https://custom.api.com");
        assert_eq!(client.model, "openai/gpt-4o-mini");
    }

    #[tokio::test]
    #[ignore = "requires OPENROUTER_API_KEY env var"]
    async fn test_live_api() {
        let api_key = std::env::var("OPENROUTER_API_KEY").expect("OPENROUTER_API_KEY not set");
        let client = BriefingClient::new(api_key);

        let request = BriefingRequest {
            topic: "Quarterly sync".to_string(),
            duration_minutes: 30,
            user_time: "7:00 PM Sat, Jun 1".to_string(),
            user_zone: "Asia/Kolkata".to_string(),
            counterpart_time: "9:30 AM Sat, Jun 1".to_string(),
            counterpart_zone: "America/New_York".to_string(),
        };

        let brief = client.generate(&request).await.unwrap();
        assert!(!brief.agenda.is_empty());
        assert!(!brief.etiquette_tip.is_empty());
    }
}
