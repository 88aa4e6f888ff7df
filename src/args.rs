use clap::Parser;

/// Command line arguments for the banter binary.
///
/// Every flag can also be set through the named environment variable;
/// configuration is read once at startup.
#[derive(Parser, Clone, Debug)]
pub struct Args {
    /// Base URL of the Ollama server hosting the dialogue model.
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,
    /// Name of the pretrained checkpoint to chat with.
    #[arg(long, env = "BANTER_MODEL", default_value = "blenderbot-400m-distill")]
    pub model: String,
    /// Interface the chat UI binds to.
    #[arg(long, env = "BANTER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Port the chat UI listens on.
    #[arg(long, env = "BANTER_PORT", default_value_t = 7860)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment() {
        let args = Args::parse_from(["banter"]);
        assert_eq!(args.port, 7860);
        assert_eq!(args.ollama_url, "http://localhost:11434");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["banter", "--port", "8080", "--model", "m"]);
        assert_eq!(args.port, 8080);
        assert_eq!(args.model, "m");
    }
}
