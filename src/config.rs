use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by the script loader and the tokenizer.
///
/// The tokenizer only reads `database_language`; it is passed in explicitly
/// at construction instead of being looked up lazily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// SQL dialect used to build override file names, e.g. `report.PostgreSql.sql`.
    #[serde(default = "default_database_language")]
    pub database_language: String,

    /// Extension (without the dot) of DSL scripts collected by the loader.
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            database_language: default_database_language(),
            script_extension: default_script_extension(),
        }
    }
}

impl TokenizerConfig {
    pub fn with_database_language(mut self, database_language: impl Into<String>) -> Self {
        self.database_language = database_language.into();
        self
    }

    pub fn with_script_extension(mut self, script_extension: impl Into<String>) -> Self {
        self.script_extension = script_extension.into();
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        from_file(path)
    }

    /// The dialect ends up inside file names, so it must be a plain name segment.
    pub fn validate(&self) -> ConfigResult<()> {
        let dialect = self.database_language.as_str();
        if dialect.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database_language",
                reason: "must not be empty".to_string(),
            });
        }
        if dialect.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "database_language",
                reason: format!("'{}' contains a path separator", dialect),
            });
        }
        if self.script_extension.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "script_extension",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> ConfigResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> ConfigResult<T> {
    let config = serde_json::from_str(s)?;
    Ok(config)
}

fn default_database_language() -> String {
    "MsSql".to_string()
}

fn default_script_extension() -> String {
    "dsl".to_string()
}
