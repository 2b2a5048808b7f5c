use condense::api::{self, AppState};
use condense::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    condense::setup_logging();
    let config = AppConfig::load()?;
    let addr = config.server_addr();
    api::serve(addr, AppState::new(config)).await?;
    Ok(())
}
