#![allow(non_snake_case)]

use tracing::{debug, info};

use crate::{
    config::MinerConfig,
    error::{MineError, Result},
    itemsets::{
        count::{count_candidates, count_singletons, par_count_candidates},
        search::generate_candidates_from_prev,
    },
    tracker::{frequency, Layer, Tracker},
    transactions::TransactionStore,
    types::{ItemsetCounts, ItemsetLength},
};

/// Reported once per counted layer, including the final layer that turns
/// up no frequent itemsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerEvent {
    pub itemset_len: ItemsetLength,
    pub candidates: usize,
    pub frequent: usize,
}

pub trait LayerObserver {
    fn layer_counted(&mut self, event: &LayerEvent);
}

impl<F: FnMut(&LayerEvent)> LayerObserver for F {
    fn layer_counted(&mut self, event: &LayerEvent) {
        self(event)
    }
}

/// Level-wise Apriori miner.
#[derive(Debug, Clone, Copy, Default)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Find every itemset whose frequency is at least `min_frequency`.
    pub fn mine(&self, transactions: &TransactionStore, min_frequency: f64) -> Result<Tracker> {
        self.mine_with_observer(transactions, min_frequency, &mut |_: &LayerEvent| {})
    }

    pub fn mine_with_observer(
        &self,
        transactions: &TransactionStore,
        min_frequency: f64,
        observer: &mut dyn LayerObserver,
    ) -> Result<Tracker> {
        if !(0.0..=1.0).contains(&min_frequency) {
            return Err(MineError::InvalidThreshold(min_frequency));
        }
        self.config.validate()?;

        let N = transactions.len();
        info!(transactions = N, min_frequency, "mining frequent itemsets");

        let mut tracker = Tracker::new(N);

        // 1-itemset
        let singleton_counts = count_singletons(transactions);
        let num_candidates = singleton_counts.len();
        let mut layer = frequent_layer(1, singleton_counts, N, min_frequency);
        report(observer, &layer, num_candidates);

        // k-itemset, k >= 2
        while !layer.is_empty() {
            let size = layer.itemset_len() + 1;
            let stop = self.config.max_len.map_or(false, |max_len| size > max_len);

            let candidates = if stop {
                None
            } else {
                Some(generate_candidates_from_prev(&layer, self.config.join))
            };
            tracker.push_layer(layer);

            let candidates = match candidates {
                Some(candidates) => candidates,
                None => break,
            };

            let counts = if self.config.parallel_counting {
                par_count_candidates(transactions, &candidates)
            } else {
                count_candidates(transactions, &candidates)
            };
            layer = frequent_layer(size, counts, N, min_frequency);
            report(observer, &layer, candidates.len());
        }

        info!(
            itemsets = tracker.len(),
            layers = tracker.layers().len(),
            "mining finished"
        );

        Ok(tracker)
    }
}

/// Mine with the default configuration.
pub fn mine(transactions: &TransactionStore, min_frequency: f64) -> Result<Tracker> {
    Miner::default().mine(transactions, min_frequency)
}

/// Keep the counted itemsets meeting the threshold (inclusive).
fn frequent_layer(
    size: ItemsetLength,
    mut counts: ItemsetCounts,
    N: usize,
    min_frequency: f64,
) -> Layer {
    counts.retain(|_, &mut support| frequency(support, N) >= min_frequency);
    Layer::new(size, counts)
}

fn report(observer: &mut dyn LayerObserver, layer: &Layer, candidates: usize) {
    let event = LayerEvent {
        itemset_len: layer.itemset_len(),
        candidates,
        frequent: layer.len(),
    };
    debug!(
        size = event.itemset_len,
        candidates = event.candidates,
        frequent = event.frequent,
        "layer counted"
    );
    observer.layer_counted(&event);
}
