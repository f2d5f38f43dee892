//! Layered configuration for graphe.
//!
//! Sources are merged in increasing priority:
//!
//! 1. Built-in defaults
//! 2. A TOML file (optional, e.g. `graphe.toml`)
//! 3. Environment variables prefixed with `GRAPHE_`, nested keys split on
//!    `__` (e.g. `GRAPHE_LIMITS__MAX_NODES=500`)
//!
//! ```toml
//! [limits]
//! max_nodes = 1000
//! max_edges = 100000
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphLimits;

/// Default node limit for graphs built from configuration.
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Default edge limit. Large enough to hold the transitive closure of a
/// fully connected graph of ~700 nodes.
pub const DEFAULT_MAX_EDGES: usize = 500_000;

/// Accepted values for `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHE_";

/// Graph size limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of nodes per graph.
    pub max_nodes: usize,
    /// Maximum number of edges per graph (closures included).
    pub max_edges: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

impl LimitsConfig {
    /// Converts into the limits enforced by [`crate::Graph`].
    #[must_use]
    pub fn to_graph_limits(&self) -> GraphLimits {
        GraphLimits::new(self.max_nodes, self.max_edges)
    }
}

/// Logging settings, consumed by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrapheConfig {
    /// Size limits.
    pub limits: LimitsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl GrapheConfig {
    /// Builds the layered figment: defaults, then the optional TOML file,
    /// then `GRAPHE_*` environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source cannot be parsed or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path)
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            max_nodes = config.limits.max_nodes,
            max_edges = config.limits.max_edges,
            level = %config.logging.level,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string, without the environment layer.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_nodes == 0 {
            return Err(Error::Config("limits.max_nodes must be > 0".to_string()));
        }
        if self.limits.max_edges == 0 {
            return Err(Error::Config("limits.max_edges must be > 0".to_string()));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "logging.level must be one of {LOG_LEVELS:?}, got '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}
