use crate::{error::MineError, types::ItemsetLength};

/// How the join step pairs up itemsets of the previous layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStrategy {
    /// Join only itemsets sharing their first k-1 items.
    #[default]
    Prefix,
    /// Union every pair and keep the unions one item larger.
    AllPairs,
}

/// Knobs for a mining run. Neither the join strategy nor parallel counting
/// changes which itemsets are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinerConfig {
    pub join: JoinStrategy,
    pub parallel_counting: bool,
    pub max_len: Option<ItemsetLength>,
}

impl MinerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    pub fn with_parallel_counting(mut self, parallel_counting: bool) -> Self {
        self.parallel_counting = parallel_counting;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<ItemsetLength>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn validate(&self) -> Result<(), MineError> {
        if self.max_len == Some(0) {
            return Err(MineError::InvalidMaxLen);
        }
        Ok(())
    }
}
