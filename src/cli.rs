//! CLI argument parsing for the `apriori` binary

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{JoinStrategy, MinerConfig};

/// Output format for mined itemsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per itemset, grouped by layer (default)
    Text,
    /// JSON report for machine parsing
    Json,
}

/// Join step used to build candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JoinArg {
    /// Join itemsets sharing all but their last item
    Prefix,
    /// Union every pair of itemsets
    AllPairs,
}

impl From<JoinArg> for JoinStrategy {
    fn from(arg: JoinArg) -> Self {
        match arg {
            JoinArg::Prefix => JoinStrategy::Prefix,
            JoinArg::AllPairs => JoinStrategy::AllPairs,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "apriori")]
#[command(version)]
#[command(about = "Mine frequent itemsets with the Apriori algorithm", long_about = None)]
pub struct Cli {
    /// Minimum frequency threshold, within [0, 1]
    #[arg(value_name = "MIN_FREQUENCY", allow_negative_numbers = true)]
    pub min_frequency: f64,

    /// Transaction file: one transaction per line, items as integers
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Largest itemset size to mine
    #[arg(long = "max-len", value_name = "N")]
    pub max_len: Option<usize>,

    /// Candidate join strategy
    #[arg(long = "join", value_enum, default_value = "prefix")]
    pub join: JoinArg,

    /// Count candidate supports on all cores
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Print one line per counted layer to stderr
    #[arg(long = "progress")]
    pub progress: bool,

    /// Print itemset count and run times to stderr
    #[arg(long = "timing")]
    pub timing: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub fn miner_config(&self) -> MinerConfig {
        MinerConfig::new()
            .with_join(self.join.into())
            .with_parallel_counting(self.parallel)
            .with_max_len(self.max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_defaults() {
        let cli = Cli::try_parse_from(["apriori", "0.25", "data.dat"]).unwrap();
        assert_eq!(cli.min_frequency, 0.25);
        assert_eq!(cli.path, PathBuf::from("data.dat"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.miner_config(), MinerConfig::default());
    }

    #[test]
    fn maps_flags_onto_config() {
        let cli = Cli::try_parse_from([
            "apriori",
            "0.5",
            "data.dat",
            "--join",
            "all-pairs",
            "--parallel",
            "--max-len",
            "3",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.miner_config(),
            MinerConfig::new()
                .with_join(JoinStrategy::AllPairs)
                .with_parallel_counting(true)
                .with_max_len(Some(3))
        );
    }

    #[test]
    fn requires_path() {
        assert!(Cli::try_parse_from(["apriori", "0.5"]).is_err());
    }
}
