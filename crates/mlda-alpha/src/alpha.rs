use std::fmt;
use std::ops::Range;

use mlda_core::Result;

use crate::config::AlphaConfig;
use crate::dense::DenseAlpha;
use crate::lookup::AlphaLookup;
use crate::two_part::{TwoPartAlpha, TwoPartSymmetricAlpha};
use crate::uniform::{UniformAlpha, UniformSymmetricAlpha};

/// Any of the alpha lookups, chosen at runtime (e.g. from configuration).
///
/// Range queries keep the variant: slicing a `TwoPartSymmetric` yields a
/// `TwoPartSymmetric` with a shifted cutoff.
#[derive(Debug, Clone, PartialEq)]
pub enum Alpha {
    Dense(DenseAlpha),
    Uniform(UniformAlpha),
    UniformSymmetric(UniformSymmetricAlpha),
    TwoPart(TwoPartAlpha),
    TwoPartSymmetric(TwoPartSymmetricAlpha),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Alpha::Dense($inner) => $body,
            Alpha::Uniform($inner) => $body,
            Alpha::UniformSymmetric($inner) => $body,
            Alpha::TwoPart($inner) => $body,
            Alpha::TwoPartSymmetric($inner) => $body,
        }
    };
}

impl Alpha {
    /// Short snake_case name of the variant, matching the config `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Alpha::Dense(_) => "dense",
            Alpha::Uniform(_) => "uniform",
            Alpha::UniformSymmetric(_) => "uniform_symmetric",
            Alpha::TwoPart(_) => "two_part",
            Alpha::TwoPartSymmetric(_) => "two_part_symmetric",
        }
    }

    /// Configuration that rebuilds an equivalent lookup.
    ///
    /// Dense views are written out as their visible columns only. Cutoffs
    /// shifted below zero are written as 0, which selects the same vectors.
    pub fn to_config(&self) -> AlphaConfig {
        match self {
            Alpha::Dense(a) => AlphaConfig::Dense {
                rows: a.matrix().to_rows(),
            },
            Alpha::Uniform(a) => AlphaConfig::Uniform {
                vector: a.vector().to_vec(),
            },
            Alpha::UniformSymmetric(a) => AlphaConfig::UniformSymmetric {
                alpha: a.alpha(),
                num_topics: a.num_topics(),
            },
            Alpha::TwoPart(a) => AlphaConfig::TwoPart {
                first: a.first().to_vec(),
                second: a.second().to_vec(),
                cutoff: clamp_cutoff(a.cutoff()),
            },
            Alpha::TwoPartSymmetric(a) => AlphaConfig::TwoPartSymmetric {
                alpha1: a.alpha1(),
                alpha2: a.alpha2(),
                cutoff: clamp_cutoff(a.cutoff()),
                num_topics: a.num_topics(),
            },
        }
    }
}

fn clamp_cutoff(cutoff: i64) -> usize {
    usize::try_from(cutoff.max(0)).unwrap_or(usize::MAX)
}

impl AlphaLookup for Alpha {
    fn num_topics(&self) -> usize {
        dispatch!(self, a => a.num_topics())
    }

    #[inline]
    fn get_one(&self, doc: usize) -> Result<&[f64]> {
        dispatch!(self, a => a.get_one(doc))
    }

    fn get_range(&self, docs: Range<usize>) -> Result<Self> {
        Ok(match self {
            Alpha::Dense(a) => Alpha::Dense(a.get_range(docs)?),
            Alpha::Uniform(a) => Alpha::Uniform(a.get_range(docs)?),
            Alpha::UniformSymmetric(a) => Alpha::UniformSymmetric(a.get_range(docs)?),
            Alpha::TwoPart(a) => Alpha::TwoPart(a.get_range(docs)?),
            Alpha::TwoPartSymmetric(a) => Alpha::TwoPartSymmetric(a.get_range(docs)?),
        })
    }

    fn alpha_sum(&self, doc: usize) -> Result<f64> {
        dispatch!(self, a => a.alpha_sum(doc))
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, a => fmt::Display::fmt(a, f))
    }
}

macro_rules! impl_alpha_from {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for Alpha {
                fn from(a: $ty) -> Self {
                    Alpha::$variant(a)
                }
            }
        )*
    };
}

impl_alpha_from!(
    Dense(DenseAlpha),
    Uniform(UniformAlpha),
    UniformSymmetric(UniformSymmetricAlpha),
    TwoPart(TwoPartAlpha),
    TwoPartSymmetric(TwoPartSymmetricAlpha)
);
