use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use eyre::{Result, WrapErr};
use rand::seq::SliceRandom;
use rand::Rng;

/// Nucleotides used for random sequences.
pub const BASES: &[u8] = b"ACTG";

/// Default output file of the `generate` command.
pub const DEFAULT_OUTPUT: &str = "random_seqs.txt";

pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .filter_map(|_| BASES.choose(rng))
        .map(|x| *x as char)
        .collect()
}

/// Generate `count` pairs of random DNA sequences, each sequence is exactly `length` bases long.
pub fn random_pairs<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    count: usize,
) -> Vec<(String, String)> {
    (0..count)
        .map(|_| (random_sequence(rng, length), random_sequence(rng, length)))
        .collect()
}

/// Write pairs in the batch input format: one tab separated pair per line.
pub fn write_pairs(writer: &mut impl Write, pairs: &[(String, String)]) -> Result<()> {
    for (seq1, seq2) in pairs {
        writeln!(writer, "{seq1}\t{seq2}")?;
    }
    Ok(())
}

/// Append pairs to the file, creating it if necessary.
pub fn append_pairs(path: impl AsRef<Path>, pairs: &[(String, String)]) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open output file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    write_pairs(&mut writer, pairs)?;
    writer.flush()?;

    log::info!("{} pair(s) appended to {}", pairs.len(), path.display());
    Ok(())
}
