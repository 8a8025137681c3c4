use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::{Alphabet, DEFAULT_LENGTH};

/// Serializable description of an [`IdGenerator`](crate::IdGenerator).
///
/// Meant to be embedded in a host application's own settings. The length is
/// signed so that a negative value read from user input surfaces as
/// [`NanoIdError::InvalidLength`](crate::NanoIdError::InvalidLength) instead
/// of a deserialization error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub alphabet: Vec<Alphabet>,
    pub length: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: vec![Alphabet::UrlSafe],
            length: DEFAULT_LENGTH as i64,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        debug!("Loaded generator config: {:?}", config);
        Ok(config)
    }
}
