use crate::pairwise::scoring::Score;
use crate::pairwise::sw::matrix::Cell;

use super::{Seed, Storage};

/// Keeps the first cell (in row-major order) that holds the maximum score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Best<S: Score> {
    best: Option<Seed<S>>,
}

impl<S: Score> Best<S> {
    pub fn new() -> Self {
        Self { best: None }
    }
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Storage for Best<S> {
    type Score = S;

    fn reset(&mut self) {
        self.best = None;
    }

    #[inline(always)]
    fn observe(&mut self, cell: Cell, score: Self::Score) {
        // Strict comparison, ties keep the earlier cell. Zero-score cells never qualify.
        let current = self.best.map(|x| x.score).unwrap_or_else(S::zero);
        if score > current {
            self.best = Some(Seed::new(cell, score));
        }
    }

    fn finalize(&mut self) -> Vec<Seed<S>> {
        self.best.take().into_iter().collect()
    }
}
