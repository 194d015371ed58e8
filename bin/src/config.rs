use std::path::Path;

use log::info;
use persistance::fs::{
    config::{read_config_from, write_default_config, Config},
    options::DEFAULT_OPTIONS,
    utils::parse_location,
    ConfigError,
};

/// Writes a default config and options file, leaving existing files untouched.
pub fn install(config_file: &Path) -> Result<Config, ConfigError> {
    if config_file.exists() {
        info!("config already present at {:?}", config_file);
    } else {
        write_default_config(config_file)?;
        info!("wrote default config to {:?}", config_file);
    }
    let config = read_config_from(config_file)?;
    let options_file = parse_location(&config.general.options_location);
    if !options_file.exists() {
        if let Some(dir) = options_file.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Write(dir.to_owned(), e))?;
        }
        std::fs::write(&options_file, DEFAULT_OPTIONS)
            .map_err(|e| ConfigError::Write(options_file.clone(), e))?;
        info!("wrote default options to {:?}", options_file);
    }
    Ok(config)
}
