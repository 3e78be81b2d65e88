//! Record identity and collection merging
//!
//! Records are compared by server-assigned identifier, never structurally.

use std::collections::HashSet;

/// Server-assigned record identifier
pub type EntityId = i64;

/// Anything that may carry a server-assigned identifier
pub trait Identified {
    /// The identifier, or `None` if the record was never persisted
    fn identifier(&self) -> Option<EntityId>;
}

/// Two records are the same iff both identifiers are present and equal.
pub fn same_record<A: Identified, B: Identified>(a: &A, b: &B) -> bool {
    matches!((a.identifier(), b.identifier()), (Some(x), Some(y)) if x == y)
}

/// Prepend every candidate that is not yet in `collection`.
///
/// Absent candidates and candidates without identifier are dropped.
/// Duplicates among the candidates collapse to their first occurrence.
/// The result is the kept candidates, in input order, followed by the
/// untouched collection. Merging again with the same candidates is a no-op.
pub fn merge_missing<'a, E, I>(collection: &[E], candidates: I) -> Vec<E>
where
    E: Identified + Clone + 'a,
    I: IntoIterator<Item = Option<&'a E>>,
{
    let present: Vec<&E> = candidates.into_iter().flatten().collect();
    if present.is_empty() {
        return collection.to_vec();
    }

    let mut seen: HashSet<EntityId> = collection.iter().filter_map(|e| e.identifier()).collect();
    let mut merged: Vec<E> = present
        .into_iter()
        .filter(|candidate| match candidate.identifier() {
            Some(id) => seen.insert(id),
            None => false,
        })
        .cloned()
        .collect();

    merged.extend_from_slice(collection);
    merged
}
