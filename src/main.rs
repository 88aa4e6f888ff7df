use clap::Parser;
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

use banter::{Args, OllamaModel, TurnProcessor, logger, router, shutdown_signal};

fn build_ollama(base: &str) -> anyhow::Result<ollama_rs::Ollama> {
    let url = Url::parse(base)?;
    let host = format!(
        "{}://{}",
        url.scheme(),
        url.host_str()
            .ok_or_else(|| anyhow::anyhow!("no host in {base}"))?
    );
    let port = url
        .port_or_known_default()
        .ok_or_else(|| anyhow::anyhow!("no port in {base}"))?;
    let http = Client::builder().pool_max_idle_per_host(10).build()?;
    Ok(ollama_rs::Ollama::new_with_client(host, port, http))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let client = build_ollama(&args.ollama_url)?;
    let model = Arc::new(OllamaModel::new(client, args.model.clone()));
    tracing::info!(
        model = %args.model,
        "loading the dialogue model (the first load can take a minute)"
    );
    model.preload().await;

    let processor = Arc::new(TurnProcessor::new(model));
    let app = router(processor);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving chat interface");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
