//! The document → alpha lookup contract shared by every variant.

use std::ops::Range;

use mlda_core::{AlphaMatrix, Result};
use rayon::prelude::*;

/// Maps document ids to alpha vectors.
///
/// Implementations are immutable after construction, so a lookup can be read
/// from many worker threads at once.
pub trait AlphaLookup: Send + Sync {
    /// Length of every vector this lookup returns (K).
    fn num_topics(&self) -> usize;

    /// Alpha vector of document `doc`.
    fn get_one(&self, doc: usize) -> Result<&[f64]>;

    /// A lookup restricted to `docs`, indexed from zero.
    ///
    /// For every `i < docs.len()`, `get_range(docs)?.get_one(i)` equals
    /// `get_one(docs.start + i)`.
    fn get_range(&self, docs: Range<usize>) -> Result<Self>
    where
        Self: Sized;

    /// Sum of the alpha vector of document `doc`.
    fn alpha_sum(&self, doc: usize) -> Result<f64> {
        Ok(self.get_one(doc)?.iter().sum())
    }

    /// The explicit K×D matrix this lookup stands for over `0..num_docs`.
    fn materialize(&self, num_docs: usize) -> Result<AlphaMatrix>
    where
        Self: Sized,
    {
        let k = self.num_topics();
        let mut data = vec![0.0f64; k * num_docs];
        data.par_chunks_mut(k)
            .enumerate()
            .try_for_each(|(doc, column)| -> Result<()> {
                column.copy_from_slice(self.get_one(doc)?);
                Ok(())
            })?;
        AlphaMatrix::from_column_major(data, k, num_docs)
    }
}
