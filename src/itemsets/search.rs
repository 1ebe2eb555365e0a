use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::{
    combi::{join_all_pairs, join_step},
    config::JoinStrategy,
    itemset::Itemset,
    tracker::Layer,
};

pub type CandidateSet = HashSet<Itemset>;

/// Generate the candidates of size k+1 from the frequent layer of size k.
///
/// Every union produced by the join step is validated at most once: a union
/// whose k-subsets are all frequent becomes a candidate, any other union is
/// remembered as a non-candidate so a later pair cannot re-derive it.
pub fn generate_candidates_from_prev(prev: &Layer, strategy: JoinStrategy) -> CandidateSet {
    let k = prev.itemset_len();
    let itemsets: Vec<&Itemset> = prev.itemsets().sorted().collect();

    let unions = match strategy {
        JoinStrategy::Prefix => join_step(&itemsets),
        JoinStrategy::AllPairs => join_all_pairs(&itemsets),
    };

    let pruned = prune(unions, prev);

    debug!(
        size = k + 1,
        candidates = pruned.candidates.len(),
        pruned = pruned.non_candidates.len(),
        validations = pruned.validations,
        "generated candidates"
    );

    pruned.candidates
}

/// Outcome of the prune step for one layer.
#[derive(Debug, Default)]
pub(crate) struct Pruned {
    pub candidates: CandidateSet,
    pub non_candidates: HashSet<Itemset>,
    /// Number of subset checks run; at most one per distinct union.
    pub validations: usize,
}

/// Split the joined unions into candidates and non-candidates.
pub(crate) fn prune(unions: Vec<Itemset>, prev: &Layer) -> Pruned {
    let k = prev.itemset_len();
    let mut pruned = Pruned {
        candidates: HashSet::with_capacity(unions.len()),
        ..Pruned::default()
    };

    for union in unions {
        // both halves of a 2-itemset are frequent singletons by construction
        if k == 1 {
            pruned.candidates.insert(union);
            continue;
        }
        if pruned.candidates.contains(&union) || pruned.non_candidates.contains(&union) {
            continue;
        }
        pruned.validations += 1;
        if has_infrequent_subset(&union, prev) {
            pruned.non_candidates.insert(union);
        } else {
            pruned.candidates.insert(union);
        }
    }

    pruned
}

/// Whether removing some single item from `candidate` gives an itemset
/// missing from `prev`.
fn has_infrequent_subset(candidate: &Itemset, prev: &Layer) -> bool {
    (0..candidate.len()).any(|i| !prev.contains(&candidate.without(i)))
}
