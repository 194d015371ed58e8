use std::{collections::BTreeMap, fs, path::Path};

use serde_derive::{Deserialize, Serialize};

use super::ConfigError;

pub const PRIMARY_MENU_LOCATION: &str = "menu_primary";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    pub port: u16,
    pub host: String,
    /// TOML file holding the theme option groups.
    pub options_location: String,
    pub static_location: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            port: 6684,
            host: "0.0.0.0".into(),
            options_location: "~/baolog/options.toml".into(),
            static_location: "./static".into(),
        }
    }
}

/// What the host platform exposes through `bloginfo`. Unset fields render as empty strings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SiteIdentity {
    pub name: String,
    pub description: String,
    pub home_url: String,
    pub stylesheet_url: String,
    pub template_url: String,
    pub pingback_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuNode {
    pub label: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }
}

/// Menus keyed by theme location.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Menus(pub BTreeMap<String, Vec<MenuNode>>);

impl Menus {
    pub fn has_menu(&self, location: &str) -> bool {
        self.0.get(location).map_or(false, |items| !items.is_empty())
    }

    pub fn get(&self, location: &str) -> &[MenuNode] {
        self.0.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn insert(&mut self, location: impl Into<String>, items: Vec<MenuNode>) {
        self.0.insert(location.into(), items);
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub site: SiteIdentity,
    #[serde(default)]
    pub menus: Menus,
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

pub fn read_config_from(file: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(file).map_err(|e| ConfigError::Read(file.to_owned(), e))?;
    Config::from_toml(&raw)
}

pub fn write_default_config(file: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::Write(dir.to_owned(), e))?;
    }
    fs::write(file, DEFAULT_CONFIG).map_err(|e| ConfigError::Write(file.to_owned(), e))
}

const DEFAULT_CONFIG: &str = r#"[general]
port = 6684
host = "0.0.0.0"
options_location = "~/baolog/options.toml"
static_location = "./static"

[site]
name = "BaoLog"
description = ""
home_url = "http://localhost:6684"
stylesheet_url = "http://localhost:6684/static/style.css"
template_url = "http://localhost:6684/static"
pingback_url = "http://localhost:6684/xmlrpc.php"

# [[menus.menu_primary]]
# label = "首页"
# link = "http://localhost:6684"
"#;
