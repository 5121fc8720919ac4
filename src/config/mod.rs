mod labels;
mod palette;

pub use labels::{default_labels, TOKEN_USAGE_INFO, TOKEN_USAGE_INFO_LINK};
pub use palette::{BrandRamp, ContrastPalette};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::Color;

/// Static data the classifier reads: display names and both palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub labels: IndexMap<String, String>,
    pub brand_ramp: BrandRamp,
    pub contrast: ContrastPalette,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            brand_ramp: BrandRamp::default(),
            contrast: ContrastPalette::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    labels: IndexMap<String, String>,
    brand_ramp: Option<BTreeMap<u16, Color>>,
    contrast: Option<[Color; 3]>,
}

impl GraphConfig {
    /// Display name for a function key, falling back to the key itself.
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_json::from_str(json).context("Failed to parse tokengraph config")?;

        let mut config = Self::default();
        config.labels.extend(file.labels);
        if let Some(ramp) = file.brand_ramp {
            config.brand_ramp = BrandRamp::new(ramp)?;
        }
        if let Some(colors) = file.contrast {
            config.contrast = ContrastPalette::new(colors);
        }
        Ok(config)
    }

    /// Loads overrides from `path`, or returns the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config");
                let json = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config file {}", p.display()))?;
                Self::from_json(&json)
                    .with_context(|| format!("Invalid config file {}", p.display()))
            }
            None => {
                tracing::debug!("using built-in config");
                Ok(Self::default())
            }
        }
    }
}
