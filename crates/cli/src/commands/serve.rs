//! `writeflow serve` — Start the HTTP gateway.

use writeflow_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("✍️  writeflow");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "   Provider:  {}",
        if config.has_api_key() { "live" } else { "offline" }
    );

    writeflow_gateway::start(config).await?;

    Ok(())
}
