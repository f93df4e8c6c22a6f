pub mod asset;
pub mod config;
pub mod input;
pub mod logging;
mod report;

pub use glam as math;
pub use palette as color;
pub use quartz;
pub use report::{error_log_path, install_panic_hook, nonfatal_error, ResultExt};
pub use tactile::*;

use config::EngineConfig;

/// Loads configuration, wires logging and the panic hook, and returns the
/// settings for the caller to apply to its scene and controls.
pub fn start() -> asset::Result<EngineConfig> {
    install_panic_hook();
    #[cfg(debug_assertions)]
    EngineConfig::create_default_config_if_missing()?;
    let config = EngineConfig::load_config()?;
    logging::init_from_config(&config)?;
    log::info!("{}", console::style("Controls ready").bold());
    Ok(config)
}
