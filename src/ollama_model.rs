use async_trait::async_trait;
use ollama_rs::{
    Ollama, generation::completion::request::GenerationRequest, models::ModelOptions,
};

use crate::model::{DialogueModel, GenerateOptions, ModelError};

/// Build a completion request carrying the fixed sampling options.
fn build_request(model: &str, input: &str, opts: &GenerateOptions) -> GenerationRequest<'static> {
    let options = ModelOptions::default()
        .num_ctx(opts.max_input_tokens as u64)
        .num_predict(opts.max_reply_tokens as i32)
        .top_k(opts.top_k)
        .top_p(opts.top_p)
        .temperature(opts.temperature);
    GenerationRequest::new(model.to_string(), input.to_string()).options(options)
}

/// [`DialogueModel`] implementation backed by [`Ollama`].
#[derive(Clone)]
pub struct OllamaModel {
    client: Ollama,
    model: String,
}

impl OllamaModel {
    /// Creates a new Ollama-backed dialogue model.
    pub fn new(client: Ollama, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Returns the configured checkpoint name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the backend to load the checkpoint into memory.
    ///
    /// An empty prompt makes Ollama pull the model in without generating
    /// anything, so the first user message is not stuck behind a cold load.
    /// Failure here is not fatal; the first real call will retry the load.
    pub async fn preload(&self) {
        let req = GenerationRequest::new(self.model.clone(), String::new());
        if let Err(e) = self.client.generate(req).await {
            tracing::warn!(error = %e, model = %self.model, "model preload failed");
        } else {
            tracing::info!(model = %self.model, "model loaded");
        }
    }
}

#[async_trait]
impl DialogueModel for OllamaModel {
    async fn generate(&self, input: &str, options: &GenerateOptions) -> Result<String, ModelError> {
        let req = build_request(&self.model, input, options);
        let res = self
            .client
            .generate(req)
            .await
            .map_err(|e| ModelError::Backend(Box::new(e)))?;
        let text = res.response.trim().to_string();
        if text.is_empty() {
            return Err(ModelError::EmptyReply);
        }
        Ok(text)
    }
}
