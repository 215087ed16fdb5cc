use std::fmt::{Display, Formatter};
use std::ops::Index;

use derive_getters::Dissolve;
use derive_more::{Constructor, Display, From, Into};
use eyre::{ensure, Result};
use itertools::Itertools;

use crate::pairwise::scoring::{Scheme, Score};
use crate::Alignable;

/// Position of a cell inside the score matrix.
/// Row `i` and column `j` correspond to symbols `seq1[i - 1]` and `seq2[j - 1]`.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
    Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Dense local alignment (Smith-Waterman) score matrix stored in row-major order.
///
/// Dimensions are `(len(seq1) + 1) x (len(seq2) + 1)`. Row 0 and column 0 are always zero
/// and every cell is non-negative. The matrix is never modified after construction.
#[derive(Clone, Eq, PartialEq, Debug, Dissolve)]
pub struct ScoreMatrix<S: Score> {
    rows: usize,
    cols: usize,
    data: Vec<S>,
}

impl<S: Score> ScoreMatrix<S> {
    /// Fill the score matrix for the given pair of sequences.
    pub fn build<Seq1, Seq2, Sc>(seq1: &Seq1, seq2: &Seq2, scheme: &Sc) -> Self
    where
        Seq1: Alignable,
        Seq2: Alignable<Symbol = Seq1::Symbol>,
        Seq1::Symbol: PartialEq,
        Sc: Scheme<Seq1::Symbol, Score = S>,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        let mut data = vec![S::zero(); rows * cols];
        let gap = scheme.gap();

        for i in 1..rows {
            let s1 = seq1.at(i - 1);
            for j in 1..cols {
                let s2 = seq2.at(j - 1);
                let diagonal = data[(i - 1) * cols + j - 1];

                // Prior cells are non-negative and the match reward is positive,
                // so the match branch never needs the zero floor
                data[i * cols + j] = if s1 == s2 {
                    diagonal + scheme.score(s1, s2)
                } else {
                    let up = data[(i - 1) * cols + j] + gap;
                    let left = data[i * cols + j - 1] + gap;
                    let mismatch = diagonal + scheme.score(s1, s2);
                    S::zero().max(up).max(left).max(mismatch)
                };
            }
        }

        Self { rows, cols, data }
    }

    /// Create a matrix from explicit rows.
    /// Fails unless rows are rectangular, non-negative, and have zero first row/column.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        ensure!(!rows.is_empty(), "Score matrix must have at least one row");
        let cols = rows[0].len();
        ensure!(cols > 0, "Score matrix must have at least one column");

        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            ensure!(
                row.len() == cols,
                "Score matrix row {i} has {} columns, expected {cols}",
                row.len()
            );
            for (j, value) in row.into_iter().enumerate() {
                ensure!(
                    value >= S::zero(),
                    "Score matrix cell ({i}, {j}) is negative: {value}"
                );
                ensure!(
                    (i > 0 && j > 0) || value.is_zero(),
                    "Score matrix boundary cell ({i}, {j}) must be zero, got {value}"
                );
                data.push(value);
            }
        }
        Ok(Self {
            rows: nrows,
            cols,
            data,
        })
    }

    /// Number of rows, i.e. `len(seq1) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, i.e. `len(seq2) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline(always)]
    pub fn get(&self, cell: Cell) -> Option<S> {
        if self.contains(cell) {
            Some(self.data[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[S] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells with their scores in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, S)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(ind, score)| (Cell::new(ind / cols, ind % cols), *score))
    }
}

impl<S: Score> Index<Cell> for ScoreMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, cell: Cell) -> &Self::Output {
        debug_assert!(self.contains(cell));
        &self.data[cell.row * self.cols + cell.col]
    }
}

impl<S: Score> Display for ScoreMatrix<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row(row).iter().join("\t"))?;
        }
        Ok(())
    }
}
