use std::fmt;
use std::ops::Range;

use mlda_core::{AlphaMatrix, MldaError, Result};

use crate::lookup::AlphaLookup;

/// Explicit per-document alpha: a K×D matrix with one column per document.
///
/// Range queries return a zero-copy column view; ids into the view are
/// relative to the start of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseAlpha {
    matrix: AlphaMatrix,
}

impl DenseAlpha {
    pub fn new(matrix: AlphaMatrix) -> Self {
        Self { matrix }
    }

    /// Build from K rows (topics) of D document values.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        Ok(Self::new(AlphaMatrix::from_rows(rows)?))
    }

    pub fn matrix(&self) -> &AlphaMatrix {
        &self.matrix
    }

    /// Number of documents visible through this lookup (D).
    pub fn num_docs(&self) -> usize {
        self.matrix.num_docs()
    }
}

impl AlphaLookup for DenseAlpha {
    fn num_topics(&self) -> usize {
        self.matrix.num_topics()
    }

    fn get_one(&self, doc: usize) -> Result<&[f64]> {
        self.matrix
            .column(doc)
            .ok_or(MldaError::DocumentOutOfRange {
                doc,
                num_docs: self.matrix.num_docs(),
            })
    }

    fn get_range(&self, docs: Range<usize>) -> Result<Self> {
        Ok(Self::new(self.matrix.narrow_columns(docs)?))
    }
}

impl fmt::Display for DenseAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dense alpha over {} topics x {} documents",
            self.matrix.num_topics(),
            self.matrix.num_docs()
        )
    }
}
