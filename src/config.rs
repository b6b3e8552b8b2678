use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cost::{CostConfig, CostModel};
use crate::session::Bounds;

/// Settings for the random layout generator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RandomConfig {
    #[serde(default = "default_random_count")]
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bounds: Bounds,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            count: default_random_count(),
            seed: None,
            bounds: Bounds::default(),
        }
    }
}

fn default_random_count() -> usize {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct MstConfig {
    #[serde(default)]
    pub cost: CostConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

impl MstConfig {
    /// Missing files fall back to the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("config {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MstConfig = toml::from_str(content)?;
        config
            .random
            .bounds
            .validate()
            .context("Invalid [random] bounds")?;
        Ok(config)
    }

    pub fn cost_model(&self) -> Result<CostModel> {
        CostModel::new(self.cost.clone()).context("Invalid cost model parameters")
    }
}
