// Demo configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::shipping::Carrier;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown carrier '{name}' (expected one of: fedex, ups, usps)")]
    UnknownCarrier { name: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CartConfig {
    /// Item counts set on the cart, in order.
    pub steps: Vec<i64>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            steps: vec![1, 3, 5, 7],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShippingConfig {
    pub item_count: u32,
    pub carriers: Vec<String>,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            item_count: 5,
            carriers: vec!["fedex".into(), "ups".into(), "usps".into()],
        }
    }
}

impl ShippingConfig {
    /// Resolves the configured carrier names, failing on the first unknown one.
    pub fn carriers(&self) -> Result<Vec<Carrier>, ConfigError> {
        self.carriers.iter().map(|name| name.parse()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub cart: CartConfig,
    pub shipping: ShippingConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        // Surface bad carrier names at load time rather than mid-demo.
        config.shipping.carriers()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
