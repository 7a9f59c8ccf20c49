

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::error::{ConsultError, Result};
use crate::toolkit::knowledge::{Catalog, CatalogLoader};


pub const ENV_PREFIX: &str = "TCM_CONSULT";


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultConfig {
    /// JSON catalog to use instead of the built-in one.
    pub catalog_path: Option<String>,
    pub log_filter: String,
    /// Longest symptom phrase echoed into log lines before truncation.
    pub max_symptom_chars: usize,
}

impl ConsultConfig {
    /// Layers defaults, an optional config file, and `TCM_CONSULT_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("log_filter", defaults.log_filter)
            .and_then(|b| b.set_default("max_symptom_chars", defaults.max_symptom_chars as u64))
            .map_err(|e| ConsultError::Config(e.to_string()))?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConsultError::Config(e.to_string()))
    }

    /// The configured substitute catalog, or `None` to use the built-in one.
    pub fn load_catalog(&self) -> Result<Option<Catalog>> {
        match &self.catalog_path {
            Some(path) => Ok(Some(CatalogLoader::from_path(path)?)),
            None => Ok(None),
        }
    }
}

impl Default for ConsultConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "warn".to_string(),
            max_symptom_chars: 40,
        }
    }
}
