//! End-to-end mining scenarios through the public API.

use std::collections::HashSet;

use apriori_miner::{mine, Itemset, MineError, Miner, MinerConfig, TransactionStore, Tracker};

fn store(raw: Vec<Vec<usize>>) -> TransactionStore {
    TransactionStore::from_records(raw)
}

fn itemsets_of_size(tracker: &Tracker, size: usize) -> HashSet<Vec<usize>> {
    tracker
        .layer(size)
        .map(|layer| layer.itemsets().map(|itemset| itemset.items().to_vec()).collect())
        .unwrap_or_default()
}

fn set(raw: Vec<Vec<usize>>) -> HashSet<Vec<usize>> {
    raw.into_iter().collect()
}

#[test]
fn scenario_a_stops_after_pairs() {
    let transactions = store(vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
    let tracker = mine(&transactions, 0.5).unwrap();

    assert_eq!(tracker.layers().len(), 2);
    assert_eq!(tracker.len(), 6);
    assert_eq!(itemsets_of_size(&tracker, 1), set(vec![vec![1], vec![2], vec![3]]));
    assert_eq!(
        itemsets_of_size(&tracker, 2),
        set(vec![vec![1, 2], vec![1, 3], vec![2, 3]])
    );

    for item in 1..=3 {
        assert_eq!(tracker.support(&Itemset::singleton(item)), Some(3));
        assert_eq!(tracker.frequency(&Itemset::singleton(item)), Some(0.75));
    }
    for pair in [vec![1, 2], vec![1, 3], vec![2, 3]] {
        assert_eq!(tracker.support(&Itemset::from_items(pair)), Some(2));
    }
    assert!(!tracker.contains(&Itemset::from_items(vec![1, 2, 3])));
}

#[test]
fn scenario_b_nothing_frequent() {
    let transactions = store(vec![vec![1], vec![2], vec![3]]);
    let tracker = mine(&transactions, 0.5).unwrap();

    assert!(tracker.is_empty());
    assert_eq!(tracker.len(), 0);
    assert_eq!(tracker.total_transactions(), 3);
}

#[test]
fn zero_threshold_returns_every_occurring_itemset() {
    let transactions = store(vec![vec![1, 2], vec![2, 3]]);
    let tracker = mine(&transactions, 0.0).unwrap();

    assert_eq!(itemsets_of_size(&tracker, 1), set(vec![vec![1], vec![2], vec![3]]));
    // {1, 3} never occurs together
    assert_eq!(itemsets_of_size(&tracker, 2), set(vec![vec![1, 2], vec![2, 3]]));
    assert_eq!(tracker.layers().len(), 2);
}

#[test]
fn full_threshold_keeps_common_items_only() {
    let transactions = store(vec![vec![1, 2, 5], vec![1, 2, 3], vec![2, 1, 4]]);
    let tracker = mine(&transactions, 1.0).unwrap();

    assert_eq!(itemsets_of_size(&tracker, 1), set(vec![vec![1], vec![2]]));
    assert_eq!(itemsets_of_size(&tracker, 2), set(vec![vec![1, 2]]));
    assert_eq!(tracker.len(), 3);

    let disjoint = store(vec![vec![1], vec![2]]);
    assert!(mine(&disjoint, 1.0).unwrap().is_empty());
}

#[test]
fn empty_transactions_are_counted() {
    let transactions = store(vec![vec![1], vec![], vec![], vec![]]);
    assert!(mine(&transactions, 0.5).unwrap().is_empty());
    assert_eq!(mine(&transactions, 0.25).unwrap().len(), 1);
}

#[test]
fn no_transactions() {
    let tracker = mine(&TransactionStore::default(), 0.3).unwrap();
    assert!(tracker.is_empty());
}

#[test]
fn invalid_threshold_rejected_before_mining() {
    let transactions = store(vec![vec![1]]);
    assert_eq!(
        mine(&transactions, 1.01),
        Err(MineError::InvalidThreshold(1.01))
    );
    assert!(mine(&transactions, -0.5).is_err());
    assert!(mine(&TransactionStore::default(), f64::NAN).is_err());
}

#[test]
fn long_itemsets_are_mined_layer_by_layer() {
    let transactions = store(vec![vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4], vec![9]]);
    let tracker = Miner::new(MinerConfig::default()).mine(&transactions, 0.5).unwrap();

    assert_eq!(tracker.max_itemset_len(), 5);
    assert!(tracker.contains(&Itemset::from_items(vec![1, 2, 3, 4, 5])));
    assert_eq!(tracker.support(&Itemset::from_items(vec![1, 2, 3, 4])), Some(3));
    // 2^5 - 1 subsets of {1..5}
    assert_eq!(tracker.len(), 31);
}
