pub use best::Best;
pub use top::Top;

use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::pairwise::scoring::Score;

use super::matrix::{Cell, ScoreMatrix};

mod best;
mod top;

/// A cell selected as the end point of a local alignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Constructor, Dissolve)]
pub struct Seed<S: Score> {
    pub cell: Cell,
    pub score: S,
}

/// Storage collects candidate alignment end points while the matrix is scanned.
pub trait Storage {
    type Score: Score;

    fn reset(&mut self);

    /// Called once for every matrix cell in row-major order.
    fn observe(&mut self, cell: Cell, score: Self::Score);

    /// Alignment seeds in the order they should be traced back.
    fn finalize(&mut self) -> Vec<Seed<Self::Score>>;
}

/// Scan the matrix in row-major order, feeding every cell to the storage.
pub fn scan<S: Score, St: Storage<Score = S>>(
    matrix: &ScoreMatrix<S>,
    storage: &mut St,
) -> Vec<Seed<S>> {
    storage.reset();
    for (cell, score) in matrix.cells() {
        storage.observe(cell, score);
    }
    storage.finalize()
}
