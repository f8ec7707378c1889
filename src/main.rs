use krishimitra_backend::{config::Config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    server::init_tracing(&config);
    tracing::debug!(?config, "loaded configuration");

    server::run(config).await
}
