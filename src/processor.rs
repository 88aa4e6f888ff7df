use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{DialogueModel, GenerateOptions};
use crate::transcript::{Transcript, Turn};

/// Reply appended when the backend fails mid-call.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble right now. Please try again.";

/// Folds each user message into one generation call and merges the result
/// back into the transcript.
///
/// Context policy: only the assistant half of the most recent turn is
/// prepended to the next prompt. Earlier turns are dropped deliberately so
/// the prompt stays bounded no matter how long the session runs.
pub struct TurnProcessor {
    model: Arc<dyn DialogueModel>,
    options: GenerateOptions,
    gate: Mutex<()>,
}

impl TurnProcessor {
    pub fn new(model: Arc<dyn DialogueModel>) -> Self {
        Self {
            model,
            options: GenerateOptions::default(),
            gate: Mutex::new(()),
        }
    }

    fn prompt_for(&self, message: &str, history: &Transcript) -> String {
        match history.last() {
            Some(prev) => format!("{} {}", prev.reply, message),
            None => message.to_string(),
        }
    }

    /// Run one exchange against the model.
    ///
    /// An empty or whitespace-only `message` is a no-op and returns `history`
    /// unchanged. Otherwise the returned transcript is `history` plus exactly
    /// one turn: the model's reply on success, [`FALLBACK_REPLY`] if the
    /// backend failed. Failures are logged here and never surface to the
    /// caller.
    pub async fn process(&self, message: &str, history: &Transcript) -> Transcript {
        if message.trim().is_empty() {
            return history.clone();
        }
        let prompt = self.prompt_for(message, history);
        let result = {
            // One inference at a time; the backend is not assumed to
            // tolerate concurrent generation on a shared model.
            let _gate = self.gate.lock().await;
            self.model.generate(&prompt, &self.options).await
        };
        let reply = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "generation failed");
                FALLBACK_REPLY.to_string()
            }
        };
        history.with_turn(Turn::new(message, reply))
    }

    /// Discard all prior turns.
    pub fn reset(&self) -> Transcript {
        Transcript::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Records every prompt it receives and answers with a canned reply.
    struct RecordingModel {
        prompts: StdMutex<Vec<String>>,
        reply: String,
    }

    impl RecordingModel {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                prompts: StdMutex::new(Vec::new()),
                reply: reply.to_string(),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DialogueModel for RecordingModel {
        async fn generate(
            &self,
            input: &str,
            _options: &GenerateOptions,
        ) -> Result<String, ModelError> {
            self.prompts.lock().unwrap().push(input.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl DialogueModel for FailingModel {
        async fn generate(
            &self,
            _input: &str,
            _options: &GenerateOptions,
        ) -> Result<String, ModelError> {
            Err(ModelError::EmptyReply)
        }
    }

    #[tokio::test]
    async fn appends_exactly_one_turn() {
        let model = RecordingModel::new("hello!");
        let proc = TurnProcessor::new(model);
        let history = Transcript::new();
        let updated = proc.process("Hi", &history).await;
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.last().unwrap().user, "Hi");
        assert_eq!(updated.last().unwrap().reply, "hello!");
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn whitespace_message_is_identity() {
        let model = RecordingModel::new("unused");
        let proc = TurnProcessor::new(model.clone());
        let history = Transcript::new().with_turn(Turn::new("a", "b"));
        assert_eq!(proc.process("", &history).await, history);
        assert_eq!(proc.process("   \n\t", &history).await, history);
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn first_prompt_is_the_message_verbatim() {
        let model = RecordingModel::new("ok");
        let proc = TurnProcessor::new(model.clone());
        proc.process("Hi, how are you today?", &Transcript::new())
            .await;
        assert_eq!(model.prompts(), ["Hi, how are you today?"]);
    }

    #[tokio::test]
    async fn prompt_uses_only_the_last_reply() {
        let model = RecordingModel::new("ok");
        let proc = TurnProcessor::new(model.clone());
        let history = Transcript::new()
            .with_turn(Turn::new("ignored", "Ignored entirely"))
            .with_turn(Turn::new("a", "Nice to meet you"));
        proc.process("Tell me more", &history).await;
        assert_eq!(model.prompts(), ["Nice to meet you Tell me more"]);
    }

    #[tokio::test]
    async fn failure_appends_the_fallback_reply() {
        let proc = TurnProcessor::new(Arc::new(FailingModel));
        let history = Transcript::new();
        let updated = proc.process("Hi", &history).await;
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.last().unwrap().reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn reset_is_always_empty() {
        let proc = TurnProcessor::new(RecordingModel::new("ok"));
        assert!(proc.reset().is_empty());
        let _ = proc.process("Hi", &Transcript::new()).await;
        assert!(proc.reset().is_empty());
    }
}
