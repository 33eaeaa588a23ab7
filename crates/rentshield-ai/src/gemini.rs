//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::{AiError, Analyst, GenerateRequest, ModelTier};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PRO_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_FLASH_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings. The API key is the only credential the app uses.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub pro_model: String,
    pub flash_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            pro_model: DEFAULT_PRO_MODEL.to_string(),
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
        }
    }

    pub fn model(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Pro => &self.pro_model,
            ModelTier::Flash => &self.flash_model,
        }
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. Empty if there are none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(mut config: GeminiConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, tier: ModelTier) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url,
            self.config.model(tier)
        )
    }
}

/// Build the JSON body for a `generateContent` call.
pub fn request_body(request: &GenerateRequest<'_>) -> Value {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = request.image {
        parts.push(json!({
            "inline_data": {
                "mime_type": image.mime_type(),
                "data": BASE64.encode(image.bytes()),
            }
        }));
    }
    parts.push(json!({ "text": request.prompt }));

    let mut body = json!({ "contents": [{ "parts": parts }] });
    if let Some(schema) = &request.schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }
    body
}

#[async_trait]
impl Analyst for GeminiClient {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AiError> {
        let url = self.endpoint(request.tier);
        let body = request_body(request);

        info!(
            model = self.config.model(request.tier),
            image_bytes = request.image.map(|a| a.len()).unwrap_or(0),
            structured = request.schema.is_some(),
            "calling model"
        );
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let text = parsed.text();
        debug!(chars = text.len(), "model responded");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentshield_core::Artifact;

    #[test]
    fn client_trims_trailing_slash() {
        let mut config = GeminiConfig::new("key");
        config.base_url = "http://localhost:8089/v1beta/".into();
        let client = GeminiClient::new(config);
        assert_eq!(
            client.endpoint(ModelTier::Flash),
            "http://localhost:8089/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert_eq!(
            client.endpoint(ModelTier::Pro),
            "http://localhost:8089/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn text_body_has_single_part_and_no_config() {
        let req = GenerateRequest::text(ModelTier::Flash, "Where am I?".into());
        let body = request_body(&req);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["text"], "Where am I?");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn image_body_inlines_base64_before_text() {
        let image = Artifact::new(b"jpeg".to_vec()).unwrap();
        let req = GenerateRequest::text(ModelTier::Pro, "Analyze".into())
            .with_image(&image)
            .with_schema(json!({ "type": "OBJECT" }));
        let body = request_body(&req);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[0]["inline_data"]["data"], "anBlZw==");
        assert_eq!(parts[1]["text"], "Analyze");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn response_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"isIllegal\": " }, { "text": "true, \"evidence\": \"x\"}" }] }
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), r#"{"isIllegal": true, "evidence": "x"}"#);
    }

    #[test]
    fn response_without_candidates_is_empty() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.text(), "");

        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), "");
    }
}
