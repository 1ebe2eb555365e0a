use itertools::Itertools;

use crate::{
    itemset::Itemset,
    types::{ItemsetCounts, ItemsetLength, Support},
};

/// All frequent itemsets of one size, with their supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    itemset_len: ItemsetLength,
    counts: ItemsetCounts,
}

impl Layer {
    pub fn new(itemset_len: ItemsetLength, counts: ItemsetCounts) -> Self {
        debug_assert!(counts.keys().all(|itemset| itemset.len() == itemset_len));
        Self { itemset_len, counts }
    }

    pub fn itemset_len(&self) -> ItemsetLength {
        self.itemset_len
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.counts.contains_key(itemset)
    }

    pub fn support(&self, itemset: &Itemset) -> Option<Support> {
        self.counts.get(itemset).copied()
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset> + '_ {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, Support)> + '_ {
        self.counts.iter().map(|(itemset, &support)| (itemset, support))
    }

    /// Itemsets in canonical order, for stable output.
    pub fn sorted(&self) -> Vec<(&Itemset, Support)> {
        self.iter().sorted().collect()
    }

    pub fn counts(&self) -> &ItemsetCounts {
        &self.counts
    }

    pub fn into_counts(self) -> ItemsetCounts {
        self.counts
    }
}

/// Result of a mining run: frequent layers of size 1, 2, 3, ... in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tracker {
    layers: Vec<Layer>,
    total_transactions: usize,
}

impl Tracker {
    pub fn new(total_transactions: usize) -> Self {
        Self {
            layers: Vec::new(),
            total_transactions,
        }
    }

    /// Append the next layer. Its itemsets must be one item larger than the
    /// last layer's, and it must not be empty.
    pub(crate) fn push_layer(&mut self, layer: Layer) {
        debug_assert_eq!(layer.itemset_len(), self.layers.len() + 1);
        debug_assert!(!layer.is_empty());
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layer holding itemsets of `itemset_len` items.
    pub fn layer(&self, itemset_len: ItemsetLength) -> Option<&Layer> {
        itemset_len
            .checked_sub(1)
            .and_then(|index| self.layers.get(index))
    }

    pub fn total_transactions(&self) -> usize {
        self.total_transactions
    }

    /// Total number of frequent itemsets over all layers.
    pub fn len(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn max_itemset_len(&self) -> ItemsetLength {
        self.layers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, Support)> + '_ {
        self.layers.iter().flat_map(|layer| layer.iter())
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.support(itemset).is_some()
    }

    pub fn support(&self, itemset: &Itemset) -> Option<Support> {
        self.layer(itemset.len())?.support(itemset)
    }

    pub fn frequency(&self, itemset: &Itemset) -> Option<f64> {
        self.support(itemset)
            .map(|support| frequency(support, self.total_transactions))
    }

    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }
}

/// Support over transaction count; zero when there are no transactions.
pub fn frequency(support: Support, total_transactions: usize) -> f64 {
    if total_transactions == 0 {
        0.0
    } else {
        support as f64 / total_transactions as f64
    }
}
