//! # mlda-alpha
//!
//! Per-document Dirichlet priors ("alpha") for LDA-style topic models.
//!
//! Every document may carry its own alpha vector, but in practice only one or
//! two distinct vectors are needed. The lookups here answer "which alpha does
//! document `d` use?" without materializing a K×D array:
//! - `DenseAlpha` — explicit K×D matrix, one column per document
//! - `UniformAlpha` / `UniformSymmetricAlpha` — one vector for every document
//! - `TwoPartAlpha` / `TwoPartSymmetricAlpha` — two contiguous document groups
//!   split at a cutoff
//!
//! `Alpha` wraps all five behind one type and `AlphaConfig` builds them from
//! serialized configuration.

pub mod alpha;
pub mod config;
pub mod dense;
pub mod lookup;
pub mod two_part;
pub mod uniform;

pub use alpha::Alpha;
pub use config::AlphaConfig;
pub use dense::DenseAlpha;
pub use lookup::AlphaLookup;
pub use two_part::{TwoPartAlpha, TwoPartSymmetricAlpha};
pub use uniform::{UniformAlpha, UniformSymmetricAlpha};

pub use mlda_core::{AlphaMatrix, AlphaVector, MldaError, Result};
