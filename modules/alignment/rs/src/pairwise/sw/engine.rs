use derive_getters::Dissolve;
use derive_more::Constructor;
use eyre::Result;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{Scheme, Score};
use crate::Alignable;

use super::matrix::ScoreMatrix;
use super::storage::{self, Seed};
use super::traceback;

/// Which matrix cells are traced back into alignments.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Selection {
    /// The first cell (row-major) holding the matrix maximum.
    #[default]
    Best,
    /// Up to N highest scoring cells, ties kept in row-major order.
    Top(usize),
}

/// Thresholds an alignment must reach to be reported.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default, Constructor, Dissolve)]
pub struct Filters<S: Score> {
    pub min_score: Option<S>,
    pub min_length: Option<usize>,
}

/// Result of a single requested alignment.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Outcome<S: Score> {
    /// The alignment passed all filters.
    Aligned(Alignment<S>),
    /// The score matrix has no positive cell.
    NoAlignment,
    /// Rejected before the traceback, the seed score is below the threshold.
    BelowMinScore { score: S, min_score: S },
    /// Rejected after the traceback, the alignment has too few columns.
    BelowMinLength { length: usize, min_length: usize },
}

impl<S: Score> Outcome<S> {
    pub fn is_aligned(&self) -> bool {
        matches!(self, Outcome::Aligned(_))
    }

    pub fn alignment(&self) -> Option<&Alignment<S>> {
        match self {
            Outcome::Aligned(x) => Some(x),
            _ => None,
        }
    }
}

/// Local alignment engine: builds the score matrix for a pair of sequences, selects the
/// end points, traces them back and applies the score/length filters.
#[derive(Clone, Debug, Default)]
pub struct Engine<Sc> {
    scoring: Sc,
}

impl<Sc> Engine<Sc> {
    pub fn new(scoring: Sc) -> Self {
        Self { scoring }
    }

    pub fn matrix<Seq1, Seq2, S>(&self, seq1: &Seq1, seq2: &Seq2) -> ScoreMatrix<S>
    where
        S: Score,
        Seq1: Alignable,
        Seq2: Alignable<Symbol = Seq1::Symbol>,
        Seq1::Symbol: PartialEq,
        Sc: Scheme<Seq1::Symbol, Score = S>,
    {
        ScoreMatrix::build(seq1, seq2, &self.scoring)
    }

    /// Align two sequences and report one outcome per selected end point.
    ///
    /// `Selection::Best` always yields exactly one outcome (possibly `NoAlignment`).
    /// `Selection::Top(n)` yields at most `n` outcomes, fewer if the matrix holds fewer
    /// positive cells, and none at all for an all-zero matrix.
    pub fn align<Seq1, Seq2, S>(
        &self,
        seq1: &Seq1,
        seq2: &Seq2,
        selection: Selection,
        filters: &Filters<S>,
    ) -> Result<Vec<Outcome<S>>>
    where
        S: Score,
        Seq1: Alignable,
        Seq2: Alignable<Symbol = Seq1::Symbol>,
        Seq1::Symbol: Copy + PartialEq + Into<char>,
        Sc: Scheme<Seq1::Symbol, Score = S>,
    {
        let matrix = self.matrix(seq1, seq2);
        let seeds = match selection {
            Selection::Best => storage::scan(&matrix, &mut storage::Best::new()),
            Selection::Top(n) => storage::scan(&matrix, &mut storage::Top::new(n)),
        };
        log::debug!(
            "Score matrix {}x{}: {} seed(s) selected with {:?}",
            matrix.rows(),
            matrix.cols(),
            seeds.len(),
            selection
        );
        log::trace!("Score matrix:\n{matrix}");

        if seeds.is_empty() && selection == Selection::Best {
            return Ok(vec![Outcome::NoAlignment]);
        }

        seeds
            .into_iter()
            .map(|seed| Self::evaluate(&matrix, seq1, seq2, seed, filters))
            .collect()
    }

    fn evaluate<Seq1, Seq2, S>(
        matrix: &ScoreMatrix<S>,
        seq1: &Seq1,
        seq2: &Seq2,
        seed: Seed<S>,
        filters: &Filters<S>,
    ) -> Result<Outcome<S>>
    where
        S: Score,
        Seq1: Alignable,
        Seq2: Alignable<Symbol = Seq1::Symbol>,
        Seq1::Symbol: Copy + PartialEq + Into<char>,
    {
        // The score is known before the traceback, the length only after it
        if let Some(min_score) = filters.min_score {
            if seed.score < min_score {
                return Ok(Outcome::BelowMinScore {
                    score: seed.score,
                    min_score,
                });
            }
        }

        let alignment = traceback::trace(matrix, seq1, seq2, seed.cell)?;
        if let Some(min_length) = filters.min_length {
            if alignment.len() < min_length {
                return Ok(Outcome::BelowMinLength {
                    length: alignment.len(),
                    min_length,
                });
            }
        }
        Ok(Outcome::Aligned(alignment))
    }
}
