use nonprofit_service::config::NonprofitConfig;
use nonprofit_service::startup::Application;
use service_core::observability::init_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NonprofitConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing_from_config("nonprofit-service", &config.common);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
