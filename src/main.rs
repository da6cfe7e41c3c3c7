//! Estoque server binary.

use estoque::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    estoque::start_server(config).await?;

    Ok(())
}
