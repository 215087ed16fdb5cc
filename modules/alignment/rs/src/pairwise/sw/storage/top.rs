use std::collections::BTreeMap;

use crate::pairwise::scoring::Score;
use crate::pairwise::sw::index::ScoreIndex;
use crate::pairwise::sw::matrix::Cell;

use super::{Seed, Storage};

/// Keeps up to `limit` cells with the highest scores.
///
/// Cells are ranked by score (descending); cells sharing a score keep the row-major order
/// of discovery. Fewer than `limit` seeds are returned if the matrix holds fewer positive cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Top<S: Score> {
    limit: usize,
    buckets: BTreeMap<S, Vec<Cell>>,
}

impl<S: Score> Top<S> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            buckets: BTreeMap::new(),
        }
    }
}

impl<S: Score> Storage for Top<S> {
    type Score = S;

    fn reset(&mut self) {
        self.buckets.clear();
    }

    #[inline(always)]
    fn observe(&mut self, cell: Cell, score: Self::Score) {
        if score > S::zero() {
            self.buckets.entry(score).or_default().push(cell);
        }
    }

    fn finalize(&mut self) -> Vec<Seed<S>> {
        let index = ScoreIndex::from(std::mem::take(&mut self.buckets));
        index.top(self.limit).collect()
    }
}
