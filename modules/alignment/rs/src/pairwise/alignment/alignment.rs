use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use crate::Score;

use super::step::Step;

/// A local alignment between two sequences, as reconstructed by the traceback.
///
/// `top` and `bottom` are the aligned, gap-padded subsequences of the first and second
/// sequence, `markers` encodes each column: `|` for a match, `:` for a mismatch, and a
/// space for a gap. All three lines have the same number of characters.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    top: String,
    markers: String,
    bottom: String,
    steps: Vec<Step>,
    seq1: Range<usize>,
    seq2: Range<usize>,
}

impl<S: Score> Alignment<S> {
    pub(crate) fn new(
        score: S,
        top: String,
        markers: String,
        bottom: String,
        steps: Vec<Step>,
        seq1: Range<usize>,
        seq2: Range<usize>,
    ) -> Self {
        debug_assert_eq!(top.chars().count(), markers.chars().count());
        debug_assert_eq!(bottom.chars().count(), markers.chars().count());
        debug_assert_eq!(
            steps.iter().fold((0, 0), |(a, b), x| {
                let (da, db) = x.op().consumes();
                (a + da * x.len(), b + db * x.len())
            }),
            (seq1.len(), seq2.len())
        );
        Self {
            score,
            top,
            markers,
            bottom,
            steps,
            seq1,
            seq2,
        }
    }

    /// Number of alignment columns (not the length of either sequence).
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len()).sum()
    }

    /// Checks if the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the run-length encoded representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}\n{}", self.top, self.markers, self.bottom)
    }
}
