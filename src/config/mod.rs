#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::core::{ConfigProvider, CERTIFICATE_TABLE};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Fully resolved connection settings for the certificate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

pub(crate) fn default_table() -> String {
    CERTIFICATE_TABLE.to_string()
}

impl SourceSettings {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: default_table(),
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for SourceSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for SourceSettings {
    fn validate(&self) -> Result<()> {
        validate_source(self)
    }
}

/// Checks shared by every configuration provider.
pub fn validate_source<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_url("source.url", config.base_url())?;
    validation::validate_non_empty_string("source.api_key", config.api_key())?;
    validation::validate_table_name("source.table", config.table())?;
    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
    }
    Ok(())
}
