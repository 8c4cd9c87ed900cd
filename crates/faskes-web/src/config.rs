use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use faskes_core::util::normalize_text_option;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_OUT_DIR: &str = "out";
const DEFAULT_SITE_TITLE: &str = "Informasi Faskes & Alkes COVID-19";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime settings for building and previewing the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub data_path: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub site_title: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "FASKES_BIND_ADDR", DEFAULT_BIND_ADDR);
        if !bind_addr.contains(':') {
            return Err(ConfigError::Invalid(
                "FASKES_BIND_ADDR must be in host:port form".to_string(),
            ));
        }

        let data_path = optional_trimmed(&lookup, "FASKES_DATA_PATH").map(PathBuf::from);
        let out_dir = PathBuf::from(value_or_default(&lookup, "FASKES_OUT_DIR", DEFAULT_OUT_DIR));
        let site_title = value_or_default(&lookup, "FASKES_SITE_TITLE", DEFAULT_SITE_TITLE);

        Ok(Self {
            bind_addr,
            data_path,
            out_dir,
            site_title,
        })
    }

    /// Apply command-line flags on top of the environment values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        bind_addr: Option<String>,
    ) -> Self {
        if let Some(path) = data_path {
            self.data_path = Some(path);
        }
        if let Some(dir) = out_dir {
            self.out_dir = dir;
        }
        if let Some(addr) = normalize_text_option(bind_addr) {
            self.bind_addr = addr;
        }
        self
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    optional_trimmed(lookup, name).unwrap_or_else(|| default.to_string())
}

fn optional_trimmed(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    normalize_text_option(lookup(name))
}
