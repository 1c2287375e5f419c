//! Alphas shared by every document.

use std::fmt;
use std::ops::Range;

use mlda_core::{AlphaVector, Result};

use crate::lookup::AlphaLookup;

/// The same alpha vector for every document.
///
/// Neither `get_one` nor `get_range` can fail: ids are never bounds-checked
/// and a range query returns a lookup sharing the same vector.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformAlpha {
    vector: AlphaVector,
}

impl UniformAlpha {
    pub fn new(vector: AlphaVector) -> Self {
        Self { vector }
    }

    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(Self::new(AlphaVector::new(values)?))
    }

    pub fn vector(&self) -> &AlphaVector {
        &self.vector
    }
}

impl AlphaLookup for UniformAlpha {
    fn num_topics(&self) -> usize {
        self.vector.len()
    }

    #[inline]
    fn get_one(&self, _doc: usize) -> Result<&[f64]> {
        Ok(self.vector.as_slice())
    }

    fn get_range(&self, _docs: Range<usize>) -> Result<Self> {
        Ok(self.clone())
    }

    fn alpha_sum(&self, _doc: usize) -> Result<f64> {
        Ok(self.vector.sum())
    }
}

impl fmt::Display for UniformAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform alpha = {}", self.vector)
    }
}

/// A uniform alpha whose vector is `[alpha; K]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformSymmetricAlpha {
    inner: UniformAlpha,
    alpha: f64,
}

impl UniformSymmetricAlpha {
    pub fn new(alpha: f64, num_topics: usize) -> Result<Self> {
        Ok(Self {
            inner: UniformAlpha::new(AlphaVector::symmetric(alpha, num_topics)?),
            alpha,
        })
    }

    /// The scalar repeated across all topics.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn as_uniform(&self) -> &UniformAlpha {
        &self.inner
    }
}

impl AlphaLookup for UniformSymmetricAlpha {
    fn num_topics(&self) -> usize {
        self.inner.num_topics()
    }

    #[inline]
    fn get_one(&self, doc: usize) -> Result<&[f64]> {
        self.inner.get_one(doc)
    }

    fn get_range(&self, _docs: Range<usize>) -> Result<Self> {
        Ok(self.clone())
    }

    fn alpha_sum(&self, doc: usize) -> Result<f64> {
        self.inner.alpha_sum(doc)
    }
}

impl fmt::Display for UniformSymmetricAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform symmetric alpha = {:.6}", self.alpha)
    }
}
