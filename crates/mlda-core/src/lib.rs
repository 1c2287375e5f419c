//! # mlda-core
//!
//! Shared value types for the mlda topic-model priors.
//!
//! Provides:
//! - `AlphaVector` — an immutable, reference-counted K-dimensional prior
//! - `AlphaMatrix` — an immutable K×D column store with zero-copy column views
//! - `MldaError` and the crate-wide `Result` alias

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::MldaError;
pub use matrix::AlphaMatrix;
pub use vector::AlphaVector;

pub type Result<T> = std::result::Result<T, MldaError>;
