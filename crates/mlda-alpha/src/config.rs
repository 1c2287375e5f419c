//! Serialized alpha configuration.
//!
//! ```json
//! {"kind": "two_part_symmetric", "alpha1": 0.1, "alpha2": 0.5, "cutoff": 1200, "num_topics": 50}
//! ```

use std::path::Path;

use mlda_core::{AlphaVector, MldaError, Result};
use serde::{Deserialize, Serialize};

use crate::alpha::Alpha;
use crate::dense::DenseAlpha;
use crate::lookup::AlphaLookup;
use crate::two_part::{TwoPartAlpha, TwoPartSymmetricAlpha};
use crate::uniform::{UniformAlpha, UniformSymmetricAlpha};

/// How to build an [`Alpha`], tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlphaConfig {
    /// K rows (topics) of D document values.
    Dense { rows: Vec<Vec<f64>> },
    Uniform { vector: Vec<f64> },
    UniformSymmetric { alpha: f64, num_topics: usize },
    /// `first` for documents `0..cutoff`, `second` after.
    TwoPart {
        first: Vec<f64>,
        second: Vec<f64>,
        cutoff: usize,
    },
    TwoPartSymmetric {
        alpha1: f64,
        alpha2: f64,
        cutoff: usize,
        num_topics: usize,
    },
}

impl AlphaConfig {
    /// Symmetric prior shared by every document, the usual LDA default.
    pub fn symmetric(alpha: f64, num_topics: usize) -> Self {
        AlphaConfig::UniformSymmetric { alpha, num_topics }
    }

    /// Symmetric `1 / num_topics` prior.
    pub fn inverse_topics(num_topics: usize) -> Self {
        let alpha = if num_topics == 0 {
            0.0
        } else {
            1.0 / num_topics as f64
        };
        Self::symmetric(alpha, num_topics)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!("Loaded {} alpha config from {}", config.kind(), path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The `kind` tag of this configuration.
    pub fn kind(&self) -> &'static str {
        match self {
            AlphaConfig::Dense { .. } => "dense",
            AlphaConfig::Uniform { .. } => "uniform",
            AlphaConfig::UniformSymmetric { .. } => "uniform_symmetric",
            AlphaConfig::TwoPart { .. } => "two_part",
            AlphaConfig::TwoPartSymmetric { .. } => "two_part_symmetric",
        }
    }

    /// Build the lookup, validating shapes.
    pub fn build(&self) -> Result<Alpha> {
        let alpha: Alpha = match self {
            AlphaConfig::Dense { rows } => DenseAlpha::from_rows(rows)?.into(),
            AlphaConfig::Uniform { vector } => UniformAlpha::from_values(vector.clone())?.into(),
            AlphaConfig::UniformSymmetric { alpha, num_topics } => {
                UniformSymmetricAlpha::new(*alpha, *num_topics)?.into()
            }
            AlphaConfig::TwoPart {
                first,
                second,
                cutoff,
            } => TwoPartAlpha::new(
                AlphaVector::new(first.clone())?,
                AlphaVector::new(second.clone())?,
                *cutoff,
            )?
            .into(),
            AlphaConfig::TwoPartSymmetric {
                alpha1,
                alpha2,
                cutoff,
                num_topics,
            } => TwoPartSymmetricAlpha::new(*alpha1, *alpha2, *cutoff, *num_topics)?.into(),
        };
        tracing::debug!("Built alpha: {}", alpha);
        Ok(alpha)
    }

    /// Build the lookup and check it against the model's topic count.
    pub fn build_with_topics(&self, num_topics: usize) -> Result<Alpha> {
        let alpha = self.build()?;
        if alpha.num_topics() != num_topics {
            return Err(MldaError::TopicMismatch {
                expected: num_topics,
                got: alpha.num_topics(),
            });
        }
        Ok(alpha)
    }
}
