use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display};
use eyre::{ensure, Result};

use super::{Scheme, Score};

/// Parameters of the flat match/mismatch/gap scoring scheme.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Display)]
pub enum Parameter {
    #[display("match")]
    Match,
    #[display("mismatch")]
    Mismatch,
    #[display("gap")]
    Gap,
}

/// A rejected scoring parameter that was replaced by its default value.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor, Getters, Dissolve, Display)]
#[display("provided value for {parameter} ({provided}) is not valid, default ({default}) will be used instead")]
pub struct Adjustment<S: Score> {
    parameter: Parameter,
    provided: S,
    default: S,
}

/// Flat scoring scheme: a positive reward for identical symbols, a non-positive penalty
/// for different symbols, and a non-positive cost for every gap step.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Getters, Dissolve)]
pub struct Linear<S: Score> {
    match_score: S,
    mismatch_score: S,
    gap_score: S,
}

impl<S: Score> Linear<S> {
    /// Default reward for identical symbols (+3).
    pub fn default_match() -> S {
        S::one() + S::one() + S::one()
    }

    /// Default penalty for different symbols (-3).
    pub fn default_mismatch() -> S {
        S::zero() - Self::default_match()
    }

    /// Default cost of a single gap step (-2).
    pub fn default_gap() -> S {
        S::zero() - (S::one() + S::one())
    }

    /// Strict constructor, fails if any of the parameters is out of range.
    pub fn new(match_score: S, mismatch_score: S, gap_score: S) -> Result<Self> {
        ensure!(
            match_score > S::zero(),
            "Match score must be positive, got {match_score}"
        );
        ensure!(
            mismatch_score <= S::zero(),
            "Mismatch score must not be positive, got {mismatch_score}"
        );
        ensure!(
            gap_score <= S::zero(),
            "Gap score must not be positive, got {gap_score}"
        );
        Ok(Self {
            match_score,
            mismatch_score,
            gap_score,
        })
    }

    /// Lenient constructor: every out-of-range parameter is replaced by its default.
    /// Replacements are logged and returned to the caller.
    pub fn sanitized(
        match_score: S,
        mismatch_score: S,
        gap_score: S,
    ) -> (Self, Vec<Adjustment<S>>) {
        let mut adjustments = Vec::new();
        let mut pick = |parameter, provided: S, valid: bool, default: S| {
            if valid {
                provided
            } else {
                let adjustment = Adjustment::new(parameter, provided, default);
                log::warn!("{adjustment}");
                adjustments.push(adjustment);
                default
            }
        };

        let scheme = Self {
            match_score: pick(
                Parameter::Match,
                match_score,
                match_score > S::zero(),
                Self::default_match(),
            ),
            mismatch_score: pick(
                Parameter::Mismatch,
                mismatch_score,
                mismatch_score <= S::zero(),
                Self::default_mismatch(),
            ),
            gap_score: pick(
                Parameter::Gap,
                gap_score,
                gap_score <= S::zero(),
                Self::default_gap(),
            ),
        };
        (scheme, adjustments)
    }
}

impl<S: Score> Default for Linear<S> {
    fn default() -> Self {
        Self {
            match_score: Self::default_match(),
            mismatch_score: Self::default_mismatch(),
            gap_score: Self::default_gap(),
        }
    }
}

impl<S: Score, Symbol: PartialEq> Scheme<Symbol> for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn score(&self, a: &Symbol, b: &Symbol) -> Self::Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline(always)]
    fn gap(&self) -> Self::Score {
        self.gap_score
    }
}
