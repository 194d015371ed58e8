use directories::{ProjectDirs, UserDirs};
use std::{env, path::PathBuf};

pub const CONFIG_ENV_VAR: &str = "BAOLOG_CONFIG";

fn project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "baolog")
}

/// Returns the config directory and the config file inside it. `BAOLOG_CONFIG` overrides both.
pub fn get_config_location() -> (PathBuf, PathBuf) {
    if let Ok(file) = env::var(CONFIG_ENV_VAR) {
        let file = parse_location(&file);
        let dir = file
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        return (dir, file);
    }
    let config_dir = match project_dir() {
        Some(dirs) => dirs.config_dir().to_owned(),
        None => PathBuf::from("."),
    };
    let config_path = config_dir.join("config.toml");
    (config_dir, config_path)
}

/// Expands a leading `~` to the user's home directory.
pub fn parse_location(location: &str) -> PathBuf {
    match location.strip_prefix('~') {
        Some(rest) => {
            let home_dir = match UserDirs::new() {
                Some(dirs) => dirs.home_dir().to_owned(),
                None => PathBuf::from(env::var("HOME").unwrap_or_default()),
            };
            home_dir.join(rest.trim_start_matches(['/', '\\']))
        }
        None => PathBuf::from(location),
    }
}
