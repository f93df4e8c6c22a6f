use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::{fs::File, path::Path};

use crate::{
    asset::{self, AssetError},
    config::EngineConfig,
};

/// Sends log output to `path`. Later calls leave the first logger in place.
pub fn init(level: LevelFilter, path: &Path) -> asset::Result<()> {
    let file = File::create(path).map_err(|source| AssetError::Io {
        path: path.to_owned(),
        write: true,
        source,
    })?;
    if WriteLogger::init(level, Config::default(), file).is_err() {
        log::warn!("Logger already initialized, keeping the existing one");
    }
    Ok(())
}

pub fn init_from_config(config: &EngineConfig) -> asset::Result<()> {
    let mut path = asset::base_path();
    path.push("controls.log");
    init(config.log_level, &path)
}
