use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    itemset::Itemset,
    itemsets::search::CandidateSet,
    transactions::{Transaction, TransactionStore},
    types::{ItemCounts, ItemsetCounts, Support},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// 1-itemset supports in a single pass over the transactions.
pub fn count_singletons(transactions: &TransactionStore) -> ItemsetCounts {
    let mut item_counts: ItemCounts = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);

    for transaction in transactions {
        for &item in transaction.items() {
            let count = item_counts.entry(item).or_insert(0);
            *count += 1;
        }
    }

    convert_to_itemset_counts(item_counts)
}

/// Support of every candidate contained in at least one transaction.
/// Candidates that never occur are absent from the result.
pub fn count_candidates(transactions: &TransactionStore, candidates: &CandidateSet) -> ItemsetCounts {
    let Some(size) = candidate_len(candidates) else {
        return HashMap::new();
    };

    let counts = transactions
        .iter()
        .filter(|transaction| transaction.len() >= size)
        .fold(HashMap::new(), |counts, transaction| {
            update_counts(counts, transaction, candidates)
        });

    into_owned(counts)
}

/// Same result as [`count_candidates`], with transactions split across the
/// rayon thread pool.
pub fn par_count_candidates(
    transactions: &TransactionStore,
    candidates: &CandidateSet,
) -> ItemsetCounts {
    let Some(size) = candidate_len(candidates) else {
        return HashMap::new();
    };

    let counts = transactions
        .as_slice()
        .par_iter()
        .filter(|transaction| transaction.len() >= size)
        .fold(HashMap::new, |counts, transaction| {
            update_counts(counts, transaction, candidates)
        })
        .reduce(HashMap::new, merge_counts);

    into_owned(counts)
}

fn candidate_len(candidates: &CandidateSet) -> Option<usize> {
    candidates.iter().next().map(Itemset::len)
}

fn update_counts<'c>(
    mut counts: HashMap<&'c Itemset, Support>,
    transaction: &Transaction,
    candidates: &'c CandidateSet,
) -> HashMap<&'c Itemset, Support> {
    for candidate in candidates {
        if transaction.contains_all(candidate) {
            *counts.entry(candidate).or_insert(0) += 1;
        }
    }
    counts
}

fn merge_counts<'c>(
    mut left: HashMap<&'c Itemset, Support>,
    right: HashMap<&'c Itemset, Support>,
) -> HashMap<&'c Itemset, Support> {
    for (candidate, count) in right {
        *left.entry(candidate).or_insert(0) += count;
    }
    left
}

fn into_owned(counts: HashMap<&Itemset, Support>) -> ItemsetCounts {
    counts
        .into_iter()
        .map(|(candidate, count)| (candidate.clone(), count))
        .collect()
}

fn convert_to_itemset_counts(item_counts: ItemCounts) -> ItemsetCounts {
    item_counts
        .into_iter()
        .map(|(k, v)| (Itemset::singleton(k), v))
        .collect()
}
