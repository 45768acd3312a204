//! Rebuilds nested parent/children trees from flat left-join rows.
//!
//! Grouping state lives in a map owned by a single call, so concurrent reads never share it.

use std::collections::HashMap;
use std::hash::Hash;

/// A flat row carrying every parent column plus at most one child's columns.
pub trait FlatRow {
    type Key: Eq + Hash + Clone;
    type Parent;
    type Child;

    /// Identifier of the parent this row belongs to.
    fn key(&self) -> Self::Key;

    /// Splits the row. The child is `None` when the joined columns were all null.
    fn into_parts(self) -> (Self::Parent, Option<Self::Child>);
}

/// A parent with the children gathered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Nested<P, C> {
    pub parent: P,
    pub children: Vec<C>,
}

/// Groups rows by parent, in order of first appearance.
///
/// Parent values are taken from the first row seen for each key; later rows only contribute
/// their child. Children keep row order. A parent whose rows carry no child ends up with an
/// empty collection.
pub fn denormalize<R: FlatRow>(rows: impl IntoIterator<Item = R>) -> Vec<Nested<R::Parent, R::Child>> {
    let mut nested: Vec<Nested<R::Parent, R::Child>> = Vec::new();
    let mut positions: HashMap<R::Key, usize> = HashMap::new();

    for row in rows {
        let key = row.key();
        let (parent, child) = row.into_parts();

        let position = *positions.entry(key).or_insert_with(|| {
            nested.push(Nested {
                parent,
                children: Vec::new(),
            });
            nested.len() - 1
        });

        if let Some(child) = child {
            nested[position].children.push(child);
        }
    }

    nested
}

/// Merges a separately queried child collection into its parents by key.
///
/// Every parent is kept, in input order. Children whose key matches no parent are dropped.
pub fn attach_children<P, C, K>(
    parents: Vec<P>,
    parent_key: impl Fn(&P) -> K,
    children: impl IntoIterator<Item = C>,
    child_key: impl Fn(&C) -> K,
) -> Vec<Nested<P, C>>
where
    K: Eq + Hash,
{
    let mut grouped: HashMap<K, Vec<C>> = HashMap::new();
    for child in children {
        grouped.entry(child_key(&child)).or_default().push(child);
    }

    parents
        .into_iter()
        .map(|parent| {
            let children = grouped.remove(&parent_key(&parent)).unwrap_or_default();
            Nested { parent, children }
        })
        .collect()
}
