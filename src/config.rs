// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, ScanError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub wordlist: WordListConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub root: PathBuf,
    pub extension: String,
    #[serde(default = "default_true")]
    pub case_sensitive_extension: bool,
    #[serde(default)]
    pub follow_links: bool,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    /// Zero disables the size limit.
    #[serde(default)]
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordListConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub combinations_path: PathBuf,
    pub strings_path: PathBuf,
    #[serde(default)]
    pub failures_path: Option<PathBuf>,
    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn default_true() -> bool {
    true
}

impl Config {
    /// Layers built-in defaults, then the TOML file, then `EML_WORDSCAN__*`
    /// environment variables. An explicit path must exist; the default
    /// `config/default.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_layers(path, true),
            None => Self::load_layers(Path::new(DEFAULT_CONFIG_PATH), false),
        }
    }

    fn load_layers(file: &Path, required: bool) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(file).required(required))
            .add_source(
                config::Environment::with_prefix("EML_WORDSCAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                root: PathBuf::from("."),
                extension: ".eml".to_string(),
                case_sensitive_extension: true,
                follow_links: false,
                skip_patterns: vec![],
                max_file_size_mb: 0,
            },
            wordlist: WordListConfig {
                path: PathBuf::from("word_list.txt"),
                skip_malformed: false,
            },
            report: ReportConfig {
                combinations_path: PathBuf::from("rapport_matching_combinaisons.txt"),
                strings_path: PathBuf::from("rapport_strings_worlds.txt"),
                failures_path: Some(PathBuf::from("rapport_erreurs.txt")),
                json_path: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.extension.trim().is_empty() {
            return Err(ScanError::Config(
                "input.extension must not be empty".to_string(),
            ));
        }

        if self.report.combinations_path == self.report.strings_path {
            return Err(ScanError::Config(
                "combinations and strings reports must use different paths".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.extension, ".eml");
        assert!(config.input.case_sensitive_extension);
    }

    #[test]
    fn test_load_from_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scan.toml");
        fs::write(
            &path,
            r#"
[input]
root = "/srv/mail"
extension = ".EML"
case_sensitive_extension = false

[wordlist]
path = "terms.txt"

[report]
combinations_path = "combos.txt"
strings_path = "strings.txt"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.input.root, PathBuf::from("/srv/mail"));
        assert!(!config.input.case_sensitive_extension);
        assert_eq!(config.input.max_file_size_mb, 0);
        assert!(!config.wordlist.skip_malformed);
        assert_eq!(
            config.report.failures_path,
            Some(PathBuf::from("rapport_erreurs.txt"))
        );
        assert!(config.report.json_path.is_none());
    }

    #[test]
    fn test_missing_optional_file_keeps_env_overrides() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");

        unsafe { std::env::set_var("EML_WORDSCAN__INPUT__FOLLOW_LINKS", "true") };
        let loaded = Config::load_layers(&missing, false);
        unsafe { std::env::remove_var("EML_WORDSCAN__INPUT__FOLLOW_LINKS") };

        let config = loaded.unwrap();
        assert!(config.input.follow_links);
        assert_eq!(config.input.extension, ".eml");
        assert_eq!(
            config.report.combinations_path,
            PathBuf::from("rapport_matching_combinaisons.txt")
        );
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("absent.toml")));
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_rejects_shared_report_path() {
        let mut config = Config::default_config();
        config.report.strings_path = config.report.combinations_path.clone();
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }
}
