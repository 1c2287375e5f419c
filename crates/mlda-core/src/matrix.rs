use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::{MldaError, Result};

/// A K×D matrix of per-document alpha values (K topics, D documents).
///
/// Storage is column-major so that each document's alpha vector is a
/// contiguous K-slice. The data is reference-counted and immutable:
/// `narrow_columns` produces a zero-copy view sharing the same storage,
/// addressed through a column offset.
#[derive(Clone)]
pub struct AlphaMatrix {
    data: Arc<[f64]>,
    num_topics: usize,
    num_docs: usize,
    /// First visible column within `data`.
    offset: usize,
}

impl AlphaMatrix {
    /// Build from K rows (one per topic), each holding D document values.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let num_topics = rows.len();
        if num_topics == 0 {
            return Err(MldaError::MalformedConfig(
                "alpha matrix needs at least one topic row".into(),
            ));
        }
        let num_docs = rows[0].len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_docs) {
            return Err(MldaError::MalformedConfig(format!(
                "ragged alpha matrix: row {} has {} documents, row 0 has {}",
                i,
                row.len(),
                num_docs
            )));
        }

        let mut data = vec![0.0f64; num_topics * num_docs];
        for (k, row) in rows.iter().enumerate() {
            for (d, &v) in row.iter().enumerate() {
                data[d * num_topics + k] = v;
            }
        }
        Ok(Self::wrap(data, num_topics, num_docs))
    }

    /// Build from D columns (one per document), each holding K topic values.
    pub fn from_columns(columns: &[Vec<f64>]) -> Result<Self> {
        let num_docs = columns.len();
        let num_topics = match columns.first() {
            Some(c) => c.len(),
            None => {
                return Err(MldaError::MalformedConfig(
                    "cannot infer topic count from zero columns".into(),
                ))
            }
        };
        if num_topics == 0 {
            return Err(MldaError::MalformedConfig(
                "alpha matrix needs at least one topic".into(),
            ));
        }
        if let Some((d, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != num_topics) {
            return Err(MldaError::MalformedConfig(format!(
                "ragged alpha matrix: column {} has {} topics, column 0 has {}",
                d,
                col.len(),
                num_topics
            )));
        }

        let data: Vec<f64> = columns.iter().flatten().copied().collect();
        Ok(Self::wrap(data, num_topics, num_docs))
    }

    /// Build from a flat row-major slice of `num_topics * num_docs` values.
    pub fn from_row_major(data: &[f64], num_topics: usize, num_docs: usize) -> Result<Self> {
        if num_topics == 0 {
            return Err(MldaError::MalformedConfig(
                "alpha matrix needs at least one topic".into(),
            ));
        }
        let expected = num_topics.checked_mul(num_docs).ok_or_else(|| {
            MldaError::MalformedConfig(format!(
                "alpha matrix {num_topics}x{num_docs} overflows"
            ))
        })?;
        if data.len() != expected {
            return Err(MldaError::MalformedConfig(format!(
                "expected {} values for {}x{} alpha matrix, got {}",
                expected,
                num_topics,
                num_docs,
                data.len()
            )));
        }

        let mut col_major = vec![0.0f64; expected];
        for k in 0..num_topics {
            for d in 0..num_docs {
                col_major[d * num_topics + k] = data[k * num_docs + d];
            }
        }
        Ok(Self::wrap(col_major, num_topics, num_docs))
    }

    /// Take ownership of flat column-major data (document after document).
    pub fn from_column_major(data: Vec<f64>, num_topics: usize, num_docs: usize) -> Result<Self> {
        if num_topics == 0 {
            return Err(MldaError::MalformedConfig(
                "alpha matrix needs at least one topic".into(),
            ));
        }
        if Some(data.len()) != num_topics.checked_mul(num_docs) {
            return Err(MldaError::MalformedConfig(format!(
                "expected {}x{} column-major values, got {}",
                num_topics,
                num_docs,
                data.len()
            )));
        }
        Ok(Self::wrap(data, num_topics, num_docs))
    }

    fn wrap(data: Vec<f64>, num_topics: usize, num_docs: usize) -> Self {
        Self {
            data: data.into(),
            num_topics,
            num_docs,
            offset: 0,
        }
    }

    /// Number of topics (rows, K).
    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    /// Number of visible documents (columns, D).
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// The alpha vector of document `doc`, or `None` if out of range.
    pub fn column(&self, doc: usize) -> Option<&[f64]> {
        if doc >= self.num_docs {
            return None;
        }
        let start = (self.offset + doc) * self.num_topics;
        Some(&self.data[start..start + self.num_topics])
    }

    /// Single element at (`topic`, `doc`).
    pub fn get(&self, topic: usize, doc: usize) -> Option<f64> {
        if topic >= self.num_topics {
            return None;
        }
        self.column(doc).map(|c| c[topic])
    }

    /// Zero-copy view of columns `docs.start..docs.end`.
    ///
    /// Indices into the view are zero-based relative to `docs.start`.
    pub fn narrow_columns(&self, docs: Range<usize>) -> Result<Self> {
        if docs.start > docs.end || docs.end > self.num_docs {
            return Err(MldaError::RangeOutOfBounds {
                start: docs.start,
                stop: docs.end,
                num_docs: self.num_docs,
            });
        }
        Ok(Self {
            data: Arc::clone(&self.data),
            num_topics: self.num_topics,
            num_docs: docs.end - docs.start,
            offset: self.offset + docs.start,
        })
    }

    /// Iterate over visible columns in document order.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let start = self.offset * self.num_topics;
        let end = start + self.num_docs * self.num_topics;
        self.data[start..end].chunks_exact(self.num_topics)
    }

    /// Copy out the visible part as K rows of D values.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        let mut rows = vec![Vec::with_capacity(self.num_docs); self.num_topics];
        for col in self.columns() {
            for (row, &v) in rows.iter_mut().zip(col) {
                row.push(v);
            }
        }
        rows
    }

    /// Whether both matrices share the same storage (views included).
    pub fn shares_storage(&self, other: &AlphaMatrix) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl PartialEq for AlphaMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.num_topics == other.num_topics
            && self.num_docs == other.num_docs
            && self.columns().eq(other.columns())
    }
}

impl fmt::Debug for AlphaMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaMatrix")
            .field("num_topics", &self.num_topics)
            .field("num_docs", &self.num_docs)
            .field("offset", &self.offset)
            .finish()
    }
}
