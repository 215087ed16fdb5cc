use eyre::{ensure, Result};

use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::pairwise::scoring::Score;
use crate::Alignable;

use super::matrix::{Cell, ScoreMatrix};

/// Predecessor considered when the symbols at the current cell differ.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Move {
    /// `(i - 1, j)`: the first sequence symbol is aligned to a gap
    Up,
    /// `(i, j - 1)`: the second sequence symbol is aligned to a gap
    Left,
    /// `(i - 1, j - 1)`: both symbols are aligned as a mismatch
    Diagonal,
}

impl Move {
    /// Resolution order for predecessors with equal scores.
    pub const PRIORITY: [Move; 3] = [Move::Diagonal, Move::Left, Move::Up];

    /// Pick the predecessor with the highest score. Ties are resolved by `Move::PRIORITY`.
    pub fn resolve<S: Score>(up: S, left: S, diagonal: S) -> Move {
        let value = |x: Move| match x {
            Move::Up => up,
            Move::Left => left,
            Move::Diagonal => diagonal,
        };

        let mut best = Self::PRIORITY[0];
        for candidate in &Self::PRIORITY[1..] {
            if value(*candidate) > value(best) {
                best = *candidate;
            }
        }
        best
    }

    fn apply(&self, cell: Cell) -> Cell {
        match self {
            Move::Up => Cell::new(cell.row - 1, cell.col),
            Move::Left => Cell::new(cell.row, cell.col - 1),
            Move::Diagonal => Cell::new(cell.row - 1, cell.col - 1),
        }
    }

    fn op(&self) -> Op {
        match self {
            Move::Up => Op::GapSecond,
            Move::Left => Op::GapFirst,
            Move::Diagonal => Op::Mismatch,
        }
    }
}

/// Reconstruct the local alignment that ends at `start` by walking the matrix backwards
/// until a zero cell is reached.
///
/// Identical symbols always move diagonally. Otherwise the up, left, and diagonal
/// predecessors compete by score (see `Move::resolve`). Exactly one path is produced per
/// start cell.
///
/// `start` must hold a positive score, seeds produced by the matrix scan always do.
pub fn trace<S, Seq1, Seq2>(
    matrix: &ScoreMatrix<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    start: Cell,
) -> Result<Alignment<S>>
where
    S: Score,
    Seq1: Alignable,
    Seq2: Alignable<Symbol = Seq1::Symbol>,
    Seq1::Symbol: Copy + PartialEq + Into<char>,
{
    ensure!(
        matrix.rows() == seq1.len() + 1 && matrix.cols() == seq2.len() + 1,
        "Score matrix {}x{} doesn't match sequences of length {} and {}",
        matrix.rows(),
        matrix.cols(),
        seq1.len(),
        seq2.len()
    );
    ensure!(
        matrix.contains(start),
        "Traceback start {start} is outside of the {}x{} score matrix",
        matrix.rows(),
        matrix.cols()
    );

    let score = matrix[start];
    ensure!(
        score > S::zero(),
        "Traceback must start from a positive cell, got {score} at {start}"
    );

    let mut ops = Vec::new();
    let (mut top, mut bottom): (Vec<char>, Vec<char>) = (Vec::new(), Vec::new());

    let mut pos = start;
    // Boundary cells are zero, so row/col are always >= 1 inside the loop
    while !matrix[pos].is_zero() {
        let s1 = *seq1.at(pos.row - 1);
        let s2 = *seq2.at(pos.col - 1);

        if s1 == s2 {
            ops.push(Op::Match);
            top.push(s1.into());
            bottom.push(s2.into());
            pos = Cell::new(pos.row - 1, pos.col - 1);
            continue;
        }

        let step = Move::resolve(
            matrix[Move::Up.apply(pos)],
            matrix[Move::Left.apply(pos)],
            matrix[Move::Diagonal.apply(pos)],
        );
        match step {
            Move::Up => {
                top.push(s1.into());
                bottom.push('-');
            }
            Move::Left => {
                top.push('-');
                bottom.push(s2.into());
            }
            Move::Diagonal => {
                top.push(s1.into());
                bottom.push(s2.into());
            }
        }
        ops.push(step.op());
        pos = step.apply(pos);
    }

    // The walk runs from the alignment end to its start
    ops.reverse();
    let markers = ops.iter().map(|x| x.marker()).collect();
    let top = top.into_iter().rev().collect();
    let bottom = bottom.into_iter().rev().collect();

    Ok(Alignment::new(
        score,
        top,
        markers,
        bottom,
        Step::collapse(ops),
        pos.row..start.row,
        pos.col..start.col,
    ))
}
