// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::DEFAULT_MAX_LENGTH;
use crate::error::{MheError, MheResult};
use crate::state::ModelDims;
use serde::{Deserialize, Serialize};

/// Sliding window configuration: model metadata plus horizon length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Window capacity in entries (default: 32)
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    pub model: ModelDims,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl BufferConfig {
    pub fn new(model: ModelDims, max_length: usize) -> Self {
        BufferConfig { max_length, model }
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> MheResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> MheResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MheResult<()> {
        if self.max_length == 0 {
            return Err(MheError::InvalidCapacity {
                max_length: self.max_length,
            });
        }
        self.model
            .validate()
            .map_err(|e| MheError::ConfigError(e.to_string()))
    }
}
