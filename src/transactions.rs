use std::collections::BTreeSet;

use crate::{
    itemset::{is_sorted_subset, Itemset},
    types::ItemId,
};

/// A single basket of items. Order and repetition in the source record
/// are irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction(Vec<ItemId>);

impl Transaction {
    pub fn from_items<I: IntoIterator<Item = ItemId>>(items: I) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
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

    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        is_sorted_subset(itemset.items(), &self.0)
    }
}

impl FromIterator<ItemId> for Transaction {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Immutable collection of transactions mined in one run.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Build from raw records of item identifiers, one record per transaction.
    pub fn from_records<R, I>(records: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = ItemId>,
    {
        records.into_iter().map(Transaction::from_items).collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn distinct_items(&self) -> BTreeSet<ItemId> {
        self.transactions
            .iter()
            .flat_map(|transaction| transaction.items().iter().copied())
            .collect()
    }
}

impl FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_items_collapse() {
        let transaction = Transaction::from_items(vec![4, 1, 4, 2, 1]);
        assert_eq!(transaction.items(), &[1, 2, 4]);
        assert_eq!(transaction.len(), 3);
    }

    #[test]
    fn contains_all_checks_every_item() {
        let transaction = Transaction::from_items(vec![10, 11, 13]);
        assert!(transaction.contains_all(&Itemset::from_items(vec![10, 13])));
        assert!(!transaction.contains_all(&Itemset::from_items(vec![10, 12])));
        assert!(!transaction.contains_all(&Itemset::from_items(vec![10, 11, 13, 14])));
    }

    #[test]
    fn store_is_restartable() {
        let store = TransactionStore::from_records(vec![vec![1, 2], vec![2, 3], vec![]]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.iter().count(), 3);
        assert_eq!(store.iter().count(), 3);
        assert_eq!(store.distinct_items().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_store() {
        let store = TransactionStore::default();
        assert!(store.is_empty());
        assert_eq!(store.iter().next(), None);
    }
}
