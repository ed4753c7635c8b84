//! Nested prefix splits of the duration column.

use crate::constants::SPLIT_NAMES;

/// A named prefix of the source column.
#[derive(Debug, Clone, Copy)]
pub struct Split<'a> {
    pub name: &'static str,
    pub values: &'a [i64],
}

impl Split<'_> {
    /// Number of records in this split.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build the 25/50/75/100% prefixes of `values`.
#[must_use]
pub fn splits(values: &[i64]) -> [Split<'_>; 4] {
    let len = values.len();
    let ends = [len / 4, len / 2, 3 * len / 4, len];
    std::array::from_fn(|i| Split {
        name: SPLIT_NAMES[i],
        values: &values[..ends[i]],
    })
}
