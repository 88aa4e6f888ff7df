pub mod args;
pub mod logger;
pub mod model;
pub mod ollama_model;
pub mod processor;
pub mod server;
pub mod shutdown;
pub mod transcript;

pub use args::Args;
pub use model::{DialogueModel, GenerateOptions, ModelError};
pub use ollama_model::OllamaModel;
pub use processor::{FALLBACK_REPLY, TurnProcessor};
pub use server::{ChatRequest, router};
pub use shutdown::shutdown_signal;
pub use transcript::{Transcript, Turn};
