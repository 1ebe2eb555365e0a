use std::{io, time::Instant};

use anyhow::{Context, Result};
use apriori_miner::{
    cli::{Cli, OutputFormat},
    miner::{LayerEvent, Miner},
    output, reader,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(io::stderr)
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let program_start = Instant::now();
    let transactions = reader::read_path(&cli.path)
        .with_context(|| format!("failed to read transactions from {}", cli.path.display()))?;

    let miner = Miner::new(cli.miner_config());
    let progress = cli.progress;
    let mut observer = |event: &LayerEvent| {
        if progress {
            eprintln!(
                "Layer {}: {} candidates, {} frequent",
                event.itemset_len, event.candidates, event.frequent
            );
        }
    };

    let algo_start = Instant::now();
    let tracker = miner.mine_with_observer(&transactions, cli.min_frequency, &mut observer)?;
    let end = Instant::now();

    match cli.format {
        OutputFormat::Text => output::write_text(&tracker, io::stdout().lock())?,
        OutputFormat::Json => println!("{}", output::to_json(&tracker, cli.min_frequency)?),
    }

    if cli.timing {
        eprintln!("Frequent itemsets: {}", tracker.len());
        eprintln!(
            "Run time (milliseconds): {} (includes reading transactions)",
            (end - program_start).as_millis()
        );
        eprintln!(
            "Run time (milliseconds): {} (excludes reading transactions)",
            (end - algo_start).as_millis()
        );
    }

    Ok(())
}
