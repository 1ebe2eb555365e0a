use std::collections::HashMap;

use crate::itemset::Itemset;

pub type ItemId = usize;
/// Bounded by the transaction count, so it is at least as wide as `usize`.
pub type Support = u64;

pub type ItemCounts = HashMap<ItemId, Support>;
pub type ItemsetCounts = HashMap<Itemset, Support>;

pub type ItemsetLength = usize;
