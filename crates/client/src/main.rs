//! Scanner terminal client entry point.
//!
//! ```bash
//! SCANNER_WORLD=crates/client/data/demo.ron cargo run -p scanner-client
//! ```

use anyhow::Result;
use scanner_client::{ClientConfig, ScannerApp, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!("Starting scanner client");
    tracing::info!(world = ?config.world_path, navigator = ?config.config_path, "configuration");

    ScannerApp::build(config)?.run()
}
