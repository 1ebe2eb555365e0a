//! Frequent itemset mining with the level-wise Apriori algorithm.
//!
//! ```
//! use apriori_miner::{mine, Itemset, TransactionStore};
//!
//! let transactions =
//!     TransactionStore::from_records(vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
//! let tracker = mine(&transactions, 0.5).unwrap();
//!
//! assert_eq!(tracker.len(), 6);
//! assert_eq!(tracker.support(&Itemset::from_items(vec![1, 3])), Some(2));
//! ```

pub mod cli;
pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod itemsets;
pub mod miner;
pub mod output;
pub mod reader;
pub mod tracker;
pub mod transactions;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::{JoinStrategy, MinerConfig};
pub use error::{MineError, ReadError};
pub use itemset::Itemset;
pub use miner::{mine, LayerEvent, LayerObserver, Miner};
pub use tracker::{Layer, Tracker};
pub use transactions::{Transaction, TransactionStore};
pub use types::{ItemId, Support};
