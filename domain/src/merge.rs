//! Dedup merger: collapse results gathered under several keywords
//!
//! Collections are walked in the order given (keyword priority), then
//! records in order within each collection. The first record for an
//! identity keeps its position and its scalar fields; every later
//! duplicate only contributes set-valued fields.

use crate::record::ResultCollection;
use crate::record::entities::InstitutionRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// Field-level merge rule for records that share an identity.
pub trait Mergeable {
    /// Fold a later duplicate into `self`. Scalars on `self` are never
    /// overwritten.
    fn absorb(&mut self, later: Self);
}

impl Mergeable for InstitutionRecord {
    fn absorb(&mut self, later: Self) {
        self.program_titles.extend(later.program_titles);
    }
}

/// Merge collections into one, keyed by `identity`.
///
/// Output order is first-seen order, so the same inputs in the same order
/// always produce the same output.
pub fn merge<R, K, F>(
    collections: impl IntoIterator<Item = ResultCollection<R>>,
    identity: F,
) -> ResultCollection<R>
where
    R: Mergeable,
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut merged: Vec<R> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for collection in collections {
        for record in collection {
            let key = identity(&record);
            match positions.get(&key) {
                Some(&idx) => merged[idx].absorb(record),
                None => {
                    positions.insert(key, merged.len());
                    merged.push(record);
                }
            }
        }
    }

    ResultCollection::from(merged)
}

/// Merge institution collections by exact institution name.
pub fn merge_institutions(
    collections: impl IntoIterator<Item = ResultCollection<InstitutionRecord>>,
) -> ResultCollection<InstitutionRecord> {
    merge(collections, |r: &InstitutionRecord| r.identity().to_string())
}
