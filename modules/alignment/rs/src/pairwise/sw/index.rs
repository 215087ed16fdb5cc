use std::collections::BTreeMap;

use crate::pairwise::scoring::Score;

use super::matrix::{Cell, ScoreMatrix};
use super::storage::Seed;

/// Positive matrix scores associated with the cells that hold them.
///
/// Buckets are sorted by score in descending order. Inside a bucket, cells keep the order
/// of a row-major matrix scan. Scores are integers and compared for exact equality.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct ScoreIndex<S: Score> {
    buckets: Vec<(S, Vec<Cell>)>,
}

impl<S: Score> ScoreIndex<S> {
    pub fn build(matrix: &ScoreMatrix<S>) -> Self {
        let mut buckets: BTreeMap<S, Vec<Cell>> = BTreeMap::new();
        for (cell, score) in matrix.cells() {
            if score > S::zero() {
                buckets.entry(score).or_default().push(cell);
            }
        }
        Self::from(buckets)
    }

    /// Distinct positive scores, highest first.
    pub fn scores(&self) -> impl Iterator<Item = S> + '_ {
        self.buckets.iter().map(|(score, _)| *score)
    }

    /// Cells holding exactly the given score, in row-major order.
    pub fn cells(&self, score: S) -> &[Cell] {
        match self.buckets.binary_search_by(|(x, _)| score.cmp(x)) {
            Ok(ind) => &self.buckets[ind].1,
            Err(_) => &[],
        }
    }

    pub fn buckets(&self) -> &[(S, Vec<Cell>)] {
        &self.buckets
    }

    /// Total number of indexed cells.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, cells)| cells.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Up to `n` seeds, exhausting each score bucket before moving to the next lower score.
    pub fn top(&self, n: usize) -> impl Iterator<Item = Seed<S>> + '_ {
        self.buckets
            .iter()
            .flat_map(|(score, cells)| cells.iter().map(|cell| Seed::new(*cell, *score)))
            .take(n)
    }
}

impl<S: Score> From<BTreeMap<S, Vec<Cell>>> for ScoreIndex<S> {
    fn from(value: BTreeMap<S, Vec<Cell>>) -> Self {
        let buckets = value
            .into_iter()
            .rev()
            .filter(|(_, cells)| !cells.is_empty())
            .collect();
        Self { buckets }
    }
}
