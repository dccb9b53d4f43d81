//! `writeflow doctor` — Check config and provider readiness.

use std::sync::Arc;

use writeflow_agent::AgentLoop;
use writeflow_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 writeflow Doctor");
    println!("==================\n");

    let mut issues = 0;

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  ✅ Config file valid");
                config
            }
            Err(e) => {
                println!("  ❌ Config file invalid: {e}");
                return Err(e.into());
            }
        }
    } else {
        println!("  ℹ️  No config file — using defaults");
        AppConfig::load()?
    };

    // Provider mode
    if config.has_api_key() {
        println!("  ✅ API key configured — live provider ({})", config.default_model);
    } else {
        println!("  ⚠️  No API key — deterministic offline responses");
        issues += 1;
    }

    // Provider reachability
    let provider = writeflow_providers::router::build_from_config(&config);
    let tools = Arc::new(writeflow_tools::default_registry());
    let agent = AgentLoop::new(
        provider,
        &config.default_model,
        config.default_temperature,
        tools.clone(),
    );
    if agent.is_ready().await {
        println!("  ✅ Provider reachable");
    } else {
        println!("  ❌ Provider health check failed");
        issues += 1;
    }

    // Config summary
    println!();
    println!("  Model:          {}", config.default_model);
    println!("  Max iterations: {}", config.max_iterations);
    println!("  Gateway:        {}:{}", config.gateway.host, config.gateway.port);
    println!("  Pacing:         {}ms", config.stream.pacing_ms);
    println!("  Tools:          {}", tools.names().join(", "));

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
