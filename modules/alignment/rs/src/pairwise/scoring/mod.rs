pub use linear::{Adjustment, Linear, Parameter};

pub use crate::Score;

mod linear;

/// Scoring scheme for local alignments with a constant (linear) gap cost.
pub trait Scheme<Symbol> {
    type Score: Score;

    /// Substitution score for aligning symbol `a` against symbol `b`.
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score;

    /// Cost of a single gap step in either sequence.
    fn gap(&self) -> Self::Score;
}

impl<Symbol, T: Scheme<Symbol>> Scheme<Symbol> for &T {
    type Score = T::Score;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        (**self).score(a, b)
    }

    #[inline(always)]
    fn gap(&self) -> Self::Score {
        (**self).gap()
    }
}
