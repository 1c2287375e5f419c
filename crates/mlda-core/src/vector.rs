use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::{MldaError, Result};

/// A K-dimensional Dirichlet concentration vector.
///
/// Values are reference-counted (`Arc`) and never mutated after construction,
/// so clones are cheap and every lookup derived from a vector shares the same
/// underlying data.
#[derive(Clone)]
pub struct AlphaVector {
    values: Arc<[f64]>,
    sum: f64,
}

impl AlphaVector {
    /// Create a vector from explicit values. At least one topic is required.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(MldaError::MalformedConfig(
                "alpha vector must have at least one topic".into(),
            ));
        }
        let sum = values.iter().sum();
        Ok(Self {
            values: values.into(),
            sum,
        })
    }

    /// Symmetric vector: `num_topics` copies of `alpha`.
    pub fn symmetric(alpha: f64, num_topics: usize) -> Result<Self> {
        if num_topics == 0 {
            return Err(MldaError::MalformedConfig(
                "symmetric alpha needs num_topics > 0".into(),
            ));
        }
        Self::new(vec![alpha; num_topics])
    }

    /// Number of topics (K).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed vector.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all entries, computed once at construction.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Whether every entry equals the first one.
    pub fn is_symmetric(&self) -> bool {
        let first = self.values[0];
        self.values.iter().all(|&v| v == first)
    }

    /// Whether both vectors share the same storage.
    pub fn ptr_eq(&self, other: &AlphaVector) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl Deref for AlphaVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl PartialEq for AlphaVector {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl fmt::Debug for AlphaVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlphaVector({:?})", &*self.values)
    }
}

impl fmt::Display for AlphaVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<f64>> for AlphaVector {
    type Error = MldaError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        AlphaVector::new(values)
    }
}

impl TryFrom<&[f64]> for AlphaVector {
    type Error = MldaError;

    fn try_from(values: &[f64]) -> Result<Self> {
        AlphaVector::new(values.to_vec())
    }
}
