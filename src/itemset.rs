use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;
use serde::Serialize;

use crate::types::ItemId;

/// A set of items, stored as a strictly increasing sequence so that
/// equality, hashing and ordering depend only on membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    /// Build an itemset from items in any order. Repeats collapse.
    pub fn from_items<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    /// Caller guarantees `items` is strictly increasing.
    pub(crate) fn from_sorted(items: Vec<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.0.iter()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// All items but the last one.
    pub fn prefix(&self) -> &[ItemId] {
        match self.0.split_last() {
            Some((_, prefix)) => prefix,
            None => &[],
        }
    }

    pub fn last(&self) -> Option<ItemId> {
        self.0.last().copied()
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.iter().merge(other.0.iter()).dedup().copied().collect())
    }

    /// The itemset with the item at `index` removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn without(&self, index: usize) -> Self {
        let mut items = self.0.clone();
        items.remove(index);
        Self(items)
    }

    /// Append an item greater than every current member.
    pub(crate) fn extended_with(&self, item: ItemId) -> Self {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.extend_from_slice(&self.0);
        items.push(item);
        Self::from_sorted(items)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        is_sorted_subset(&self.0, &other.0)
    }
}

/// Merge walk over two strictly increasing sequences.
pub(crate) fn is_sorted_subset(needles: &[ItemId], haystack: &[ItemId]) -> bool {
    if needles.len() > haystack.len() {
        return false;
    }
    let mut haystack = haystack.iter();
    needles
        .iter()
        .all(|needle| haystack.find(|&item| item >= needle) == Some(needle))
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
