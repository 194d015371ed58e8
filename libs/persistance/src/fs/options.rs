use std::{collections::BTreeMap, path::Path};

use tokio::fs;
use toml::value::{Table, Value};

use super::OptionsError;

pub const THEME_OPTIONS_GROUP: &str = "baolog_framework";

pub type OptionGroup = BTreeMap<String, String>;

/// Key-value option storage owned by the site administrator. Missing groups come back empty.
pub trait OptionsStore {
    fn group(&self, key: &str) -> OptionGroup;
}

/// Option groups read from a TOML file, one table per group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptionsStore {
    groups: BTreeMap<String, OptionGroup>,
}

impl FileOptionsStore {
    /// Only string values are kept. Other values are skipped one key at a time, so one odd entry
    /// never hides the rest of a group.
    pub fn from_toml(raw: &str) -> Result<Self, OptionsError> {
        let table: Table = toml::from_str(raw)?;
        let groups = table
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::Table(values) => Some((name, string_values(values))),
                _ => None,
            })
            .collect();
        Ok(Self { groups })
    }

    pub async fn load(location: &Path) -> Result<Self, OptionsError> {
        let raw = fs::read_to_string(location)
            .await
            .map_err(|e| OptionsError::Read(location.to_owned(), e))?;
        Self::from_toml(&raw)
    }
}

fn string_values(values: Table) -> OptionGroup {
    values
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect()
}

impl OptionsStore for FileOptionsStore {
    fn group(&self, key: &str) -> OptionGroup {
        self.groups.get(key).cloned().unwrap_or_default()
    }
}

/// The theme's option group, read once per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    pub description: String,
    pub keywords: String,
    pub favicon: String,
    pub support_alipay: String,
    pub support_wechat: String,
}

impl ThemeOptions {
    pub fn from_store(store: &impl OptionsStore) -> Self {
        Self::from_group(&store.group(THEME_OPTIONS_GROUP))
    }

    pub fn from_group(group: &OptionGroup) -> Self {
        let field = |key: &str| group.get(key).cloned().unwrap_or_default();
        Self {
            description: field("baolog-description"),
            keywords: field("baolog-keywords"),
            favicon: field("baolog-favicon"),
            support_alipay: field("baolog-support-alipay"),
            support_wechat: field("baolog-support-wechat"),
        }
    }
}

pub const DEFAULT_OPTIONS: &str = r#"[baolog_framework]
baolog-description = ""
baolog-keywords = ""
baolog-favicon = ""
baolog-support-alipay = ""
baolog-support-wechat = ""
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_theme_group() {
        let store = FileOptionsStore::from_toml(
            r#"
[baolog_framework]
baolog-description = "Notes on things"
baolog-keywords = "rust,blog"
baolog-favicon = "https://cdn.example/favicon.ico"
baolog-support-alipay = "https://cdn.example/alipay.png"
baolog-support-wechat = "https://cdn.example/wechat.png"

[other_plugin]
enabled = "yes"
"#,
        )
        .unwrap();
        let options = ThemeOptions::from_store(&store);
        assert_eq!(options.description, "Notes on things");
        assert_eq!(options.keywords, "rust,blog");
        assert_eq!(options.favicon, "https://cdn.example/favicon.ico");
        assert_eq!(options.support_alipay, "https://cdn.example/alipay.png");
        assert_eq!(options.support_wechat, "https://cdn.example/wechat.png");
    }

    #[test]
    fn missing_keys_become_empty() {
        let store =
            FileOptionsStore::from_toml("[baolog_framework]\nbaolog-keywords = \"a,b\"\n").unwrap();
        let options = ThemeOptions::from_store(&store);
        assert_eq!(options.description, "");
        assert_eq!(options.keywords, "a,b");
        assert_eq!(options.favicon, "");
    }

    #[test]
    fn missing_group_is_empty() {
        let store = FileOptionsStore::default();
        assert!(store.group(THEME_OPTIONS_GROUP).is_empty());
        assert_eq!(ThemeOptions::from_store(&store), ThemeOptions::default());
    }

    #[test]
    fn non_string_values_do_not_hide_other_keys() {
        let store = FileOptionsStore::from_toml(
            r#"
top_level = "ignored"

[baolog_framework]
baolog-favicon = "/f.ico"
baolog-keywords = 3
baolog-support-alipay = "/alipay.png"

[other_plugin]
enabled = true
"#,
        )
        .unwrap();
        let options = ThemeOptions::from_store(&store);
        assert_eq!(options.favicon, "/f.ico");
        assert_eq!(options.support_alipay, "/alipay.png");
        assert_eq!(options.keywords, "");
        assert!(store.group("other_plugin").is_empty());
        assert!(store.group("top_level").is_empty());
    }

    #[test]
    fn default_options_parse() {
        let store = FileOptionsStore::from_toml(DEFAULT_OPTIONS).unwrap();
        assert_eq!(store.group(THEME_OPTIONS_GROUP).len(), 5);
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let location = std::env::temp_dir().join("baolog-does-not-exist/options.toml");
        assert!(matches!(
            FileOptionsStore::load(&location).await,
            Err(OptionsError::Read(_, _))
        ));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let location = std::env::temp_dir().join("baolog-options-test.toml");
        std::fs::write(
            &location,
            "[baolog_framework]\nbaolog-favicon = \"/favicon.ico\"\n",
        )
        .unwrap();
        let store = FileOptionsStore::load(&location).await.unwrap();
        assert_eq!(ThemeOptions::from_store(&store).favicon, "/favicon.ico");
        std::fs::remove_file(location).unwrap();
    }
}
