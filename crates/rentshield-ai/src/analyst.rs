use async_trait::async_trait;
use rentshield_core::Artifact;
use serde_json::Value;

use crate::AiError;

/// Which model class a request is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Slower, stronger model. Used for contract review.
    Pro,
    /// Fast model for everything else.
    Flash,
}

/// One call to the hosted model.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub tier: ModelTier,
    pub image: Option<&'a Artifact>,
    pub prompt: String,
    /// When set, the model is asked for a JSON document matching this schema.
    pub schema: Option<Value>,
}

impl<'a> GenerateRequest<'a> {
    /// Plain-text request.
    pub fn text(tier: ModelTier, prompt: String) -> Self {
        Self {
            tier,
            image: None,
            prompt,
            schema: None,
        }
    }

    pub fn with_image(mut self, image: &'a Artifact) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// The hosted generative model.
///
/// Returns the raw response text. Implementations make exactly one attempt
/// and impose no timeout of their own.
#[async_trait]
pub trait Analyst: Send + Sync {
    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, AiError>;
}
