use std::path::PathBuf;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use swalign_alignment_rs::pairwise::scoring::{Linear, Score};
use swalign_alignment_rs::pairwise::sw::{Filters, Selection};

use crate::input;

/// Validated settings of a batch alignment run.
#[derive(Clone, Debug, PartialEq, Eq, Getters, Dissolve)]
pub struct Config<S: Score> {
    /// Sequence pairs in processing order: input file pairs first, then the direct pair
    pairs: Vec<(String, String)>,
    scoring: Linear<S>,
    filters: Filters<S>,
    selection: Selection,
    /// Number of worker threads, 0 = all available cores
    threads: usize,
    /// Every replaced setting or skipped input, in the order of detection
    warnings: Vec<String>,
}

impl<S: Score> Config<S> {
    pub fn builder() -> ConfigBuilder<S> {
        ConfigBuilder::default()
    }
}

#[derive(Clone, Debug)]
pub struct ConfigBuilder<S: Score> {
    pairs: Vec<(String, String)>,
    input: Option<PathBuf>,
    scoring: (S, S, S),
    min_score: Option<S>,
    min_length: Option<i64>,
    num_results: Option<usize>,
    threads: usize,
    warnings: Vec<String>,
}

impl<S: Score> Default for ConfigBuilder<S> {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            input: None,
            scoring: (
                Linear::<S>::default_match(),
                Linear::<S>::default_mismatch(),
                Linear::<S>::default_gap(),
            ),
            min_score: None,
            min_length: None,
            num_results: None,
            threads: 1,
            warnings: Vec::new(),
        }
    }
}

impl<S: Score> ConfigBuilder<S> {
    fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.warnings.push(message);
    }

    pub fn with_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Add the pair given as two separate sequences. A half-specified pair is ignored.
    pub fn with_sequences(mut self, seq1: Option<String>, seq2: Option<String>) -> Self {
        match (seq1, seq2) {
            (Some(seq1), Some(seq2)) => self.pairs.push((seq1, seq2)),
            (None, None) => {}
            _ => self.warn(
                "Both --seq1 and --seq2 are required to align a pair of sequences, \
                 the provided sequence is ignored"
                    .to_string(),
            ),
        }
        self
    }

    /// Read additional pairs from a tab separated file during `build`.
    pub fn with_input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Raw scoring parameters, validated and replaced by defaults if needed during `build`.
    pub fn with_scoring(mut self, match_score: S, mismatch_score: S, gap_score: S) -> Self {
        self.scoring = (match_score, mismatch_score, gap_score);
        self
    }

    pub fn with_min_score(mut self, min_score: Option<S>) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_min_length(mut self, min_length: Option<i64>) -> Self {
        self.min_length = min_length;
        self
    }

    /// `None` reports the single best alignment, `Some(n)` the top `n` alignments.
    pub fn with_num_results(mut self, num_results: Option<usize>) -> Self {
        self.num_results = num_results;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    fn resolve_input(&mut self) -> Result<Vec<(String, String)>> {
        let Some(path) = self.input.take() else {
            return Ok(Vec::new());
        };

        if !path.exists() {
            self.warn(format!("Input file doesn't exist: {}", path.display()));
            return Ok(Vec::new());
        }
        if !path.is_file() {
            self.warn(format!("Input is not a file: {}", path.display()));
            return Ok(Vec::new());
        }

        let pairs = input::read_pairs(&path)?;
        if pairs.is_empty() {
            self.warn(format!(
                "Input file {} is empty or wrongly formatted, expected one tab separated \
                 pair of sequences per line",
                path.display()
            ));
        }
        Ok(pairs)
    }

    pub fn build(mut self) -> Result<Config<S>> {
        let mut pairs = self.resolve_input()?;
        pairs.append(&mut self.pairs);
        ensure!(
            !pairs.is_empty(),
            "Nothing to align: provide both --seq1 and --seq2 or a file with tab separated pairs"
        );

        let (match_score, mismatch_score, gap_score) = self.scoring;
        let (scoring, adjustments) = Linear::sanitized(match_score, mismatch_score, gap_score);
        self.warnings.extend(adjustments.iter().map(ToString::to_string));

        let (min_score, min_length) = (self.min_score, self.min_length);
        let min_score = match min_score {
            Some(x) if x < S::zero() => {
                self.warn(format!(
                    "Provided minimum score is negative ({x}), no minimum score will be used"
                ));
                None
            }
            x => x,
        };
        let min_length = match min_length {
            Some(x) if x < 0 => {
                self.warn(format!(
                    "Provided minimum length is negative ({x}), no minimum length will be used"
                ));
                None
            }
            x => x.map(|x| usize::try_from(x).unwrap_or(usize::MAX)),
        };

        let selection = match self.num_results {
            None => Selection::Best,
            Some(n) => Selection::Top(n),
        };

        Ok(Config {
            pairs,
            scoring,
            filters: Filters::new(min_score, min_length),
            selection,
            threads: self.threads,
            warnings: self.warnings,
        })
    }
}
