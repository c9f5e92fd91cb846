//! Backend registry
//!
//! Holds configuration for each AI backend, read once at startup and
//! immutable afterward. "Not configured" is a first-class state, never an
//! error — downstream code branches silently into the synthetic path.

use crate::models::BackendKind;
use std::collections::HashMap;
use std::env;

/// Credentials and endpoint for one AI backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub api_key: String,
    pub endpoint: String,
}

impl BackendConfig {
    pub fn new(kind: BackendKind, api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            kind,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Environment variable names per backend kind: (api key, endpoint URL).
/// Absence of either means the backend reports unconfigured.
fn env_vars_for(kind: BackendKind) -> (&'static str, &'static str) {
    match kind {
        BackendKind::Conversational => ("ASSISTANT_API_KEY", "ASSISTANT_URL"),
        BackendKind::Sentiment => ("SENTIMENT_API_KEY", "SENTIMENT_URL"),
        BackendKind::Generative => ("GENERATIVE_API_KEY", "GENERATIVE_URL"),
        BackendKind::DocumentAnalysis => ("DOCUMENT_API_KEY", "DOCUMENT_URL"),
    }
}

/// Immutable registry of backend configurations.
///
/// A single `is_configured` predicate covers both "credentials present" and
/// "client constructible" — there is no separate reachability notion here.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    configs: HashMap<BackendKind, BackendConfig>,
}

impl BackendRegistry {
    /// Build a registry from an explicit set of configurations.
    /// Entries with an empty key or endpoint are treated as absent.
    pub fn new(configs: Vec<BackendConfig>) -> Self {
        let configs = configs
            .into_iter()
            .filter(|c| !c.api_key.trim().is_empty() && !c.endpoint.trim().is_empty())
            .map(|c| (c.kind, c))
            .collect();

        Self { configs }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let configs = BackendKind::ALL
            .iter()
            .filter_map(|&kind| {
                let (key_var, url_var) = env_vars_for(kind);
                let api_key = env::var(key_var).ok()?;
                let endpoint = env::var(url_var).ok()?;
                Some(BackendConfig::new(kind, api_key, endpoint))
            })
            .collect();

        Self::new(configs)
    }

    /// Registry with no backends configured (fully offline mode).
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn is_configured(&self, kind: BackendKind) -> bool {
        self.configs.contains_key(&kind)
    }

    pub fn config_for(&self, kind: BackendKind) -> Option<&BackendConfig> {
        self.configs.get(&kind)
    }
}
