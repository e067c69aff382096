// ── Collection normalizer ──
//
// Repeated sub-blocks (port overrides, ethernet overrides) are declared as
// lists but addressed by a natural key on the controller. Writing collapses
// duplicates onto one entry per key; reading projects the controller's list
// back unchanged.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::CoreError;

/// A nested block of a Local Record, named after its attribute.
pub trait Block {
    /// Attribute name used in error messages (`port_override`, ...).
    const KIND: &'static str;
}

/// A repeated block with a natural key.
pub trait Keyed: Block {
    type Key: Eq + Hash;

    fn key(&self) -> Self::Key;
}

/// Build the controller list from local blocks.
///
/// Duplicate keys collapse to one entry: the value comes from the last
/// occurrence, the position from the first.
pub fn to_remote_list<L, R, F>(items: &[L], mut encode: F) -> Result<Vec<R>, CoreError>
where
    L: Keyed,
    F: FnMut(&L) -> Result<R, CoreError>,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_key: IndexMap<L::Key, R> = IndexMap::with_capacity(items.len());
    for item in items {
        let remote = encode(item).map_err(|source| CoreError::Block {
            kind: L::KIND,
            source: Box::new(source),
        })?;
        by_key.insert(item.key(), remote);
    }
    Ok(by_key.into_values().collect())
}

/// Project a controller list back to local blocks, preserving order.
pub fn from_remote_list<R, L, F>(items: &[R], mut decode: F) -> Result<Vec<L>, CoreError>
where
    L: Block,
    F: FnMut(&R) -> Result<L, CoreError>,
{
    items
        .iter()
        .map(|item| {
            decode(item).map_err(|source| CoreError::Block {
                kind: L::KIND,
                source: Box::new(source),
            })
        })
        .collect()
}
