use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use swalign_alignment_rs::pairwise::scoring::{Linear, Score};
use swalign_alignment_rs::pairwise::sw::{Engine, Filters, Outcome, Selection};
use swalign_core_rs::parallelism;

use crate::config::Config;

/// Alignment outcomes for one input pair.
#[derive(Clone, Debug, PartialEq, Eq, Constructor, Getters, Dissolve)]
pub struct PairReport<S: Score> {
    /// Position of the pair in `Config::pairs`
    index: usize,
    outcomes: Vec<Outcome<S>>,
    /// Number of outcomes that passed all filters
    passed: usize,
}

fn align_pair<S: Score>(
    engine: &Engine<Linear<S>>,
    selection: Selection,
    filters: &Filters<S>,
    index: usize,
    (seq1, seq2): &(String, String),
) -> Result<PairReport<S>> {
    // Sequences are aligned symbol by symbol, not byte by byte
    let seq1: Vec<char> = seq1.chars().collect();
    let seq2: Vec<char> = seq2.chars().collect();

    let outcomes = engine.align(&seq1, &seq2, selection, filters)?;
    let passed = outcomes.iter().filter(|x| x.is_aligned()).count();
    log::debug!(
        "Pair {index} ({} x {}): {passed} of {} alignment(s) passed",
        seq1.len(),
        seq2.len(),
        outcomes.len()
    );
    Ok(PairReport::new(index, outcomes, passed))
}

/// Align every configured pair. Reports follow the order of `Config::pairs`.
pub fn run<S: Score>(config: &Config<S>) -> Result<Vec<PairReport<S>>> {
    let engine = Engine::new(*config.scoring());
    let (selection, filters) = (*config.selection(), config.filters());
    let work = |(index, pair): (usize, &(String, String))| {
        align_pair(&engine, selection, filters, index, pair)
    };

    if *config.threads() == 1 || config.pairs().len() <= 1 {
        return config.pairs().iter().enumerate().map(work).collect();
    }

    let threads = parallelism::available(*config.threads())?;
    log::debug!(
        "Aligning {} pairs with {threads} thread(s)",
        config.pairs().len()
    );
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    pool.install(|| config.pairs().par_iter().enumerate().map(work).collect())
}
