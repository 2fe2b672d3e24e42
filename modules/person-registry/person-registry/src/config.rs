use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the person registry module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonRegistryConfig {
    /// Upper bound for names and contact values, in characters.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for PersonRegistryConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
        }
    }
}

impl PersonRegistryConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_text_length: self.max_text_length,
        }
    }
}

fn default_max_text_length() -> usize {
    100
}
