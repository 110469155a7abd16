//! Optional demo configuration.
//!
//! Every field has a default equal to the built-in sample data, so a config
//! file only needs the values it wants to change. The file is TOML or JSON,
//! chosen by extension and falling back to content sniffing.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::product::{self, Product};

pub const CONFIG_ENV_VAR: &str = "QUERY_DEMOS_CONFIG";

pub const DEFAULT_EMAIL_PATTERN: &str = r"\w{2,}@\w+\.\w+";
pub const DEFAULT_WORD_PATTERN: &str = "[A-Z][a-z]*";
pub const DEFAULT_PHONE_TEXT: &str =
    "blalba 847563981 argg aeg aegha 454545451 ajerg ia 987654321 Bye!";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub query: QueryConfig,
    pub pattern: PatternConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub colors: Vec<String>,
    pub numbers: Vec<i32>,
    pub products: Vec<Product>,
    /// Index overwritten after the deferred query is built.
    pub mutate_index: usize,
    pub mutate_value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub email_pattern: String,
    pub word_pattern: String,
    pub exit_word: String,
    pub phone_text: String,
    pub phone_replacer: PhoneReplacer,
}

/// How the pattern demo rewrites phone numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneReplacer {
    /// `$1`-style capture group template.
    #[default]
    Template,
    /// Closure that parses the digits and formats them.
    Closure,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            colors: product::sample_colors(),
            numbers: product::sample_numbers(),
            products: product::sample_products(),
            mutate_index: 0,
            mutate_value: -33,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            exit_word: "exit".to_string(),
            phone_text: DEFAULT_PHONE_TEXT.to_string(),
            phone_replacer: PhoneReplacer::Template,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::config(path, format!("failed to read: {err}")))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parsed = match format.as_deref() {
            Some("json") => Self::from_json(&content).map_err(|err| err.to_string()),
            Some("toml") => Self::from_toml(&content).map_err(|err| err.to_string()),
            _ if content.trim_start().starts_with('{') => {
                Self::from_json(&content).map_err(|err| err.to_string())
            }
            _ => Self::from_toml(&content).map_err(|err| err.to_string()),
        };

        parsed.map_err(|message| Error::config(path, message))
    }

    /// Loads the file named by `QUERY_DEMOS_CONFIG`, or the defaults when it
    /// is unset.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = Path::new(&path);
                info!(path = %path.display(), "loading demo config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_sample_data() {
        let config = DemoConfig::default();

        assert_eq!(config.query.numbers.len(), 15);
        assert_eq!(config.query.products.len(), 6);
        assert_eq!(config.query.colors[0], "red");
        assert_eq!(config.pattern.email_pattern, DEFAULT_EMAIL_PATTERN);
        assert_eq!(config.pattern.exit_word, "exit");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml(
            r#"
            [query]
            numbers = [5, -5, 50]

            [pattern]
            exit_word = "quit"
            "#,
        )
        .unwrap();

        assert_eq!(config.query.numbers, vec![5, -5, 50]);
        assert_eq!(config.query.products.len(), 6);
        assert_eq!(config.pattern.exit_word, "quit");
        assert_eq!(config.pattern.word_pattern, DEFAULT_WORD_PATTERN);
    }

    #[test]
    fn test_products_from_json() {
        let config = DemoConfig::from_json(
            r#"{"query": {"products": [{"model": "Kettle", "category": "Home", "price": 30}]}}"#,
        )
        .unwrap();

        assert_eq!(config.query.products, vec![Product::new("Kettle", "Home", 30)]);
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[query]\nmutate_value = -1").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.query.mutate_value, -1);
    }

    #[test]
    fn test_from_file_sniffs_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"pattern": {{"exit_word": "bye"}}}}"#).unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.pattern.exit_word, "bye");
    }

    #[test]
    fn test_phone_replacer_by_name() {
        let config = DemoConfig::from_toml("[pattern]\nphone_replacer = \"closure\"").unwrap();
        assert_eq!(config.pattern.phone_replacer, PhoneReplacer::Closure);
        assert_eq!(DemoConfig::default().pattern.phone_replacer, PhoneReplacer::Template);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "not json").unwrap();

        let err = DemoConfig::from_file(file.path()).unwrap_err();
        match err {
            Error::Config { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::from_file(Path::new("/nonexistent/demo.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
