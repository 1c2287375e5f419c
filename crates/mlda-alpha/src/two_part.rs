//! Alphas for a corpus made of two contiguous subcorpora.
//!
//! Documents `0..cutoff` use the first vector, documents from `cutoff` on use
//! the second. A range query shifts the cutoff into the range's coordinates,
//! so the split stays at the same absolute document. The shifted cutoff is
//! allowed to leave `0..=len`: a cutoff at or below zero sends every document
//! of the range to the second vector, one at or beyond the range length sends
//! every document to the first.

use std::fmt;
use std::ops::Range;

use mlda_core::{AlphaVector, MldaError, Result};

use crate::lookup::AlphaLookup;

/// Two alpha vectors split at a document cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPartAlpha {
    first: AlphaVector,
    second: AlphaVector,
    /// Signed: range queries may move it below zero.
    cutoff: i64,
}

impl TwoPartAlpha {
    /// `first` applies to documents `0..cutoff`, `second` to the rest.
    pub fn new(first: AlphaVector, second: AlphaVector, cutoff: usize) -> Result<Self> {
        if first.len() != second.len() {
            return Err(MldaError::MalformedConfig(format!(
                "two part alpha vectors differ in length: {} vs {}",
                first.len(),
                second.len()
            )));
        }
        let cutoff = i64::try_from(cutoff).map_err(|_| {
            MldaError::MalformedConfig(format!("cutoff {cutoff} does not fit in i64"))
        })?;
        Ok(Self {
            first,
            second,
            cutoff,
        })
    }

    pub fn from_values(first: Vec<f64>, second: Vec<f64>, cutoff: usize) -> Result<Self> {
        Self::new(AlphaVector::new(first)?, AlphaVector::new(second)?, cutoff)
    }

    pub fn first(&self) -> &AlphaVector {
        &self.first
    }

    pub fn second(&self) -> &AlphaVector {
        &self.second
    }

    /// Index of the first document using the second vector, in this lookup's
    /// coordinates.
    pub fn cutoff(&self) -> i64 {
        self.cutoff
    }

    #[inline]
    fn part(&self, doc: usize) -> &AlphaVector {
        match usize::try_from(self.cutoff) {
            Ok(cutoff) if doc < cutoff => &self.first,
            _ => &self.second,
        }
    }

    fn shifted(&self, docs: &Range<usize>) -> Self {
        let start = i64::try_from(docs.start).unwrap_or(i64::MAX);
        let cutoff = self.cutoff.saturating_sub(start);
        let len = i64::try_from(docs.end.saturating_sub(docs.start)).unwrap_or(i64::MAX);
        if cutoff <= 0 || cutoff >= len {
            tracing::trace!(
                "two part range {}..{} does not cross cutoff {} (shifted to {})",
                docs.start,
                docs.end,
                self.cutoff,
                cutoff
            );
        }
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            cutoff,
        }
    }
}

impl AlphaLookup for TwoPartAlpha {
    fn num_topics(&self) -> usize {
        self.first.len()
    }

    #[inline]
    fn get_one(&self, doc: usize) -> Result<&[f64]> {
        Ok(self.part(doc).as_slice())
    }

    fn get_range(&self, docs: Range<usize>) -> Result<Self> {
        Ok(self.shifted(&docs))
    }

    fn alpha_sum(&self, doc: usize) -> Result<f64> {
        Ok(self.part(doc).sum())
    }
}

impl fmt::Display for TwoPartAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Two part alpha split at {}, alpha1 = {}, alpha2 = {}",
            self.cutoff, self.first, self.second
        )
    }
}

/// A two part alpha whose vectors are `[alpha1; K]` and `[alpha2; K]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPartSymmetricAlpha {
    inner: TwoPartAlpha,
    alpha1: f64,
    alpha2: f64,
}

impl TwoPartSymmetricAlpha {
    /// `alpha1` applies before `cutoff`, `alpha2` from `cutoff` on; `num_topics`
    /// is the vector length.
    pub fn new(alpha1: f64, alpha2: f64, cutoff: usize, num_topics: usize) -> Result<Self> {
        let inner = TwoPartAlpha::new(
            AlphaVector::symmetric(alpha1, num_topics)?,
            AlphaVector::symmetric(alpha2, num_topics)?,
            cutoff,
        )?;
        Ok(Self {
            inner,
            alpha1,
            alpha2,
        })
    }

    pub fn alpha1(&self) -> f64 {
        self.alpha1
    }

    pub fn alpha2(&self) -> f64 {
        self.alpha2
    }

    pub fn cutoff(&self) -> i64 {
        self.inner.cutoff()
    }

    pub fn as_two_part(&self) -> &TwoPartAlpha {
        &self.inner
    }
}

impl AlphaLookup for TwoPartSymmetricAlpha {
    fn num_topics(&self) -> usize {
        self.inner.num_topics()
    }

    #[inline]
    fn get_one(&self, doc: usize) -> Result<&[f64]> {
        self.inner.get_one(doc)
    }

    fn get_range(&self, docs: Range<usize>) -> Result<Self> {
        Ok(Self {
            inner: self.inner.shifted(&docs),
            alpha1: self.alpha1,
            alpha2: self.alpha2,
        })
    }

    fn alpha_sum(&self, doc: usize) -> Result<f64> {
        self.inner.alpha_sum(doc)
    }
}

impl fmt::Display for TwoPartSymmetricAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Two part alpha split at {}, alpha1 = {:.6}, alpha2 = {:.6}",
            self.inner.cutoff(),
            self.alpha1,
            self.alpha2
        )
    }
}
