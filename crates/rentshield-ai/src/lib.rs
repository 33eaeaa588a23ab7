//! Model layer: the `Analyst` seam, the Gemini HTTP client, prompts, and the
//! analysis operations that always resolve to a payload.

pub mod analysis;
mod analyst;
mod error;
pub mod gemini;
pub mod prompts;

pub use analyst::{Analyst, GenerateRequest, ModelTier};
pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};
