//! Reading transactions from text: one transaction per line, items as
//! whitespace-separated non-negative integers.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::ReadError,
    transactions::{Transaction, TransactionStore},
    types::ItemId,
};

/// Parse one record. `line` is the 1-based line number used in errors.
pub fn parse_transaction(record: &str, line: usize) -> Result<Transaction, ReadError> {
    record
        .split_ascii_whitespace()
        .map(|token| {
            token.parse::<ItemId>().map_err(|_| ReadError::InvalidItem {
                line,
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Read every non-blank line of `reader` as a transaction.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<TransactionStore, ReadError> {
    let mut transactions = Vec::new();

    for (index, record) in reader.lines().enumerate() {
        let record = record?;
        if record.trim().is_empty() {
            continue;
        }
        transactions.push(parse_transaction(&record, index + 1)?);
    }

    Ok(TransactionStore::new(transactions))
}

pub fn read_path<P: AsRef<Path>>(path: P) -> Result<TransactionStore, ReadError> {
    let file = File::open(path)?;
    read_transactions(BufReader::new(file))
}
