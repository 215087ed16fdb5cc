use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::{Result, WrapErr};
use itertools::Itertools;

/// Read tab separated sequence pairs, one pair per line.
///
/// Lines are trimmed before splitting. Lines that don't have exactly two fields are skipped.
pub fn parse_pairs(reader: impl BufRead) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((seq1, seq2)) = line.trim().split('\t').collect_tuple() {
            pairs.push((seq1.to_owned(), seq2.to_owned()));
        }
    }
    Ok(pairs)
}

pub fn read_pairs(path: impl AsRef<Path>) -> Result<Vec<(String, String)>> {
    let path = path.as_ref();
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open input file: {}", path.display()))?;
    parse_pairs(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to read input file: {}", path.display()))
}
