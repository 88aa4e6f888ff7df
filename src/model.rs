use async_trait::async_trait;
use thiserror::Error;

/// Sampling policy applied to every generation call.
///
/// These values are fixed for the lifetime of the process and are not
/// user-configurable: input capped at 512 tokens, reply between 8 and 128
/// tokens, nucleus sampling with top-k 50, top-p 0.9, temperature 0.7, and
/// a single candidate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub max_input_tokens: u32,
    pub min_reply_tokens: u32,
    pub max_reply_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
    pub temperature: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_input_tokens: 512,
            min_reply_tokens: 8,
            max_reply_tokens: 128,
            top_k: 50,
            top_p: 0.9,
            temperature: 0.7,
        }
    }
}

/// Errors surfaced by a dialogue backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The backend rejected or failed the inference request.
    #[error("generation request failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The backend answered but produced no usable reply text.
    #[error("model returned an empty reply")]
    EmptyReply,
}

/// Common interface for single-shot dialogue models.
///
/// One call covers the whole tokenize/generate/decode round trip: the input
/// is a plain prompt string and the result is the decoded reply with any
/// model-internal control tokens already stripped.
#[async_trait]
pub trait DialogueModel: Send + Sync {
    /// Produce one decoded reply for `input`, sampling per `options`.
    async fn generate(&self, input: &str, options: &GenerateOptions) -> Result<String, ModelError>;
}
