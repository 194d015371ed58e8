pub mod config;
pub mod options;
pub mod utils;

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config at {0:?}")]
    Read(PathBuf, #[source] io::Error),
    #[error("could not write {0:?}")]
    Write(PathBuf, #[source] io::Error),
    #[error("could not parse config")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("could not read options at {0:?}")]
    Read(PathBuf, #[source] io::Error),
    #[error("could not parse options")]
    Parse(#[from] toml::de::Error),
}
