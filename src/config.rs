//! Simulation configuration
//!
//! The four parameters the collaborator controls: vocabulary size, embedding
//! dimension, seed and similarity threshold. Loadable from YAML or JSON.

use crate::error::{PercolationError, PercolationResult};
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of words taken from the built-in vocabulary (capped)
    pub vocab_size: usize,
    /// Embedding dimension
    pub dimension: usize,
    /// Random seed
    pub seed: i64,
    /// Minimum cosine similarity for an edge
    pub threshold: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vocab_size: 120,
            dimension: 16,
            seed: 42,
            threshold: 0.32,
        }
    }
}

impl SimulationConfig {
    /// Check the parameters the pipeline cannot work around
    pub fn validate(&self) -> PercolationResult<()> {
        if self.dimension == 0 {
            return Err(PercolationError::InvalidConfig(
                "dimension must be at least 1".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(PercolationError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Vocabulary size after applying the word cap
    pub fn effective_vocab_size(&self) -> usize {
        let effective = vocabulary::effective_size(self.vocab_size);
        if effective < self.vocab_size {
            warn!(
                "Vocabulary size {} clamped to {}",
                self.vocab_size, effective
            );
        }
        effective
    }

    pub fn from_yaml_str(s: &str) -> PercolationResult<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> PercolationResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` is parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> PercolationResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!("Loading simulation config from {:?}", path);

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.vocab_size, 120);
        assert_eq!(config.dimension, 16);
        assert_eq!(config.seed, 42);
        assert_eq!(config.threshold, 0.32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = SimulationConfig {
            dimension: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PercolationError::InvalidConfig(_))));

        let config = SimulationConfig {
            threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            vocab_size: 0,
            threshold: -5.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_vocab_size() {
        let config = SimulationConfig {
            vocab_size: 1000,
            ..Default::default()
        };
        assert_eq!(config.effective_vocab_size(), vocabulary::WORD_CAP);
        assert_eq!(SimulationConfig::default().effective_vocab_size(), 120);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = SimulationConfig::from_yaml_str("seed: 7\nthreshold: 0.5\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.dimension, 16);
        assert_eq!(config.vocab_size, 120);
    }

    #[test]
    fn test_json() {
        let config =
            SimulationConfig::from_json_str(r#"{"vocab_size": 50, "dimension": 8}"#).unwrap();
        assert_eq!(config.vocab_size, 50);
        assert_eq!(config.dimension, 8);

        let err = SimulationConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PercolationError::Parse(_)));

        let err = SimulationConfig::from_json_str(r#"{"dimension": 0}"#).unwrap_err();
        assert!(matches!(err, PercolationError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("sim.yaml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(f, "vocab_size: 30\ndimension: 4").unwrap();
        let config = SimulationConfig::load(&yaml_path).unwrap();
        assert_eq!(config.vocab_size, 30);
        assert_eq!(config.dimension, 4);

        let json_path = dir.path().join("sim.json");
        std::fs::write(&json_path, r#"{"seed": -3}"#).unwrap();
        let config = SimulationConfig::load(&json_path).unwrap();
        assert_eq!(config.seed, -3);

        let err = SimulationConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, PercolationError::Io(_)));
    }
}
