use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::error::ConfigError;
use crate::core::number::Number;

/// Inputs for one demo run. Every key is optional in the TOML file; missing
/// keys fall back to the built-in sample data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub numbers: Vec<Number>,
    pub price: Number,
    pub discount: Number,
    pub seed: Number,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: [1, 2, 3, 4, 5].map(Number::from).to_vec(),
            price: Number::Float(100.0),
            discount: Number::Float(10.0),
            seed: Number::Int(5),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, text)
    }

    pub fn from_toml(path: &Path, text: String) -> Result<Self, ConfigError> {
        match toml::from_str::<Self>(&text) {
            Ok(cfg) => Ok(cfg),
            Err(e) => Err(ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.message().to_string(),
                span: e.span(),
                text,
            }),
        }
    }

    /// An explicit path must exist; the default path is optional.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = cli_path {
            debug!(path = %p.display(), "loading config");
            return Self::load(p);
        }
        match default_config_path() {
            Some(p) if p.is_file() => {
                debug!(path = %p.display(), "loading default config");
                Self::load(&p)
            }
            _ => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.lsp-demo/demo.toml
    dirs_next::home_dir().map(|h| h.join(".lsp-demo").join("demo.toml"))
}
