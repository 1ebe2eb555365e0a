use itertools::Itertools;

use crate::itemset::Itemset;

/// Union every unordered pair of `itemsets` and keep the unions that are
/// exactly one item larger than their sources. The same union can be
/// produced by several pairs.
pub fn join_all_pairs(itemsets: &[&Itemset]) -> Vec<Itemset> {
    let k = match itemsets.first() {
        Some(itemset) => itemset.len(),
        None => return vec![],
    };

    itemsets
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let union = a.union(b);
            if union.len() == k + 1 {
                Some(union)
            } else {
                None
            }
        })
        .collect()
}

/// Join only itemsets that share their first k-1 items.
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
///
/// `itemsets` must be sorted. Every union produced is distinct.
pub fn join_step(itemsets: &[&Itemset]) -> Vec<Itemset> {
    debug_assert!(itemsets.windows(2).all(|w| w[0] < w[1]));

    let mut final_itemsets: Vec<Itemset> = Vec::with_capacity(1024); // arbitrary

    let mut i = 0;
    while i < itemsets.len() {
        let prefix = itemsets[i].prefix();
        let skip = itemsets[i..]
            .iter()
            .take_while(|itemset| itemset.prefix() == prefix)
            .count();

        for (a, b) in itemsets[i..i + skip].iter().tuple_combinations() {
            if let Some(tail) = b.last() {
                final_itemsets.push(a.extended_with(tail));
            }
        }

        i += skip;
    }

    final_itemsets
}
