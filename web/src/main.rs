use anyhow::Context;
use blog_web::config::Config;
use blog_web::AppState;
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blog_web::telemetry::init();
    let config = Config::parse();
    let state = AppState::from_config(&config).context("failed to load page templates")?;

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!(addr = %listener.local_addr()?, placeholder = %config.placeholder_url, "listening");

    blog_web::run(listener, state)
        .await
        .context("server stopped")
}
