//! # mlda
//!
//! Per-document Dirichlet priors for LDA-style topic models.
//!
//! Re-exports the value types from `mlda-core` and the alpha lookups from
//! `mlda-alpha`.
//!
//! ```
//! use mlda::{AlphaLookup, TwoPartSymmetricAlpha};
//!
//! let alpha = TwoPartSymmetricAlpha::new(6.0, 7.0, 12, 10).unwrap();
//! assert_eq!(alpha.get_one(11).unwrap(), &[6.0; 10]);
//!
//! // Restrict to a batch of documents; ids are relative to the batch start.
//! let batch = alpha.get_range(5..50).unwrap();
//! assert_eq!(batch.get_one(7).unwrap(), &[7.0; 10]);
//! ```

pub use mlda_alpha::*;
pub use mlda_core::{error, matrix, vector};
