//! Dungeon game client binary.
//!
//! Main entry point for the Dungeon game client.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from `.env` and the process environment
//! 2. File logging (the terminal belongs to the UI)
//! 3. The stage, built-in or loaded from `DUNGEON_STAGE`
//! 4. Frontend (UI) - CLI, GUI, etc.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p dungeon-client
//! DUNGEON_STAGE=levels/cave.txt DUNGEON_BOLT_RANGE=10 cargo run -p dungeon-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging, stage};
    use dungeon_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on drop
    let session_id = std::env::var("DUNGEON_SESSION_ID").ok();
    let _log_guard = logging::setup_logging(session_id.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!(
        bolt_range = %cli_config.bolt_range,
        throw_range = %cli_config.throw_range,
        "ranged commands configured"
    );

    // 3. Load the stage
    let stage = stage::load_stage(cli_config.stage_path.as_deref())?;

    // 4. Build Frontend and Client
    let frontend = CliFrontend::new(frontend_config, cli_config);
    let client = Client::builder().stage(stage).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
