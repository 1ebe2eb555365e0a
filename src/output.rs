//! Rendering of mining results.

use std::io::{self, Write};

use serde::Serialize;

use crate::{
    itemset::Itemset,
    tracker::{frequency, Tracker},
    types::{ItemsetLength, Support},
};

#[derive(Debug, Serialize)]
pub struct ItemsetRecord<'a> {
    pub items: &'a Itemset,
    pub support: Support,
    pub frequency: f64,
}

#[derive(Debug, Serialize)]
pub struct LayerRecord<'a> {
    pub size: ItemsetLength,
    pub itemsets: Vec<ItemsetRecord<'a>>,
}

/// JSON view of a tracker, layers and itemsets in canonical order.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub transactions: usize,
    pub min_frequency: f64,
    pub itemsets: usize,
    pub layers: Vec<LayerRecord<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(tracker: &'a Tracker, min_frequency: f64) -> Self {
        let total = tracker.total_transactions();
        let layers = tracker
            .layers()
            .iter()
            .map(|layer| LayerRecord {
                size: layer.itemset_len(),
                itemsets: layer
                    .sorted()
                    .into_iter()
                    .map(|(items, support)| ItemsetRecord {
                        items,
                        support,
                        frequency: frequency(support, total),
                    })
                    .collect(),
            })
            .collect();

        Self {
            transactions: total,
            min_frequency,
            itemsets: tracker.len(),
            layers,
        }
    }
}

pub fn write_text<W: Write>(tracker: &Tracker, mut out: W) -> io::Result<()> {
    if tracker.is_empty() {
        writeln!(out, "No frequent itemsets")?;
        return Ok(());
    }

    for layer in tracker.layers() {
        writeln!(
            out,
            "== Layer {} ({} itemsets) ==",
            layer.itemset_len(),
            layer.len()
        )?;
        for (itemset, support) in layer.sorted() {
            writeln!(out, "{} ({})", itemset, support)?;
        }
    }

    Ok(())
}

pub fn to_json(tracker: &Tracker, min_frequency: f64) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(tracker, min_frequency))
}
