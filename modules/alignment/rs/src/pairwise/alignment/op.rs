/// `Op` represents a single column of a pairwise local alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the first sequence, consumes a symbol of the second sequence only (v)
    GapFirst,
    /// Gap in the second sequence, consumes a symbol of the first sequence only (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Different symbols aligned against each other (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol used in the run-length encoded representation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Returns the marker printed between the two aligned lines.
    pub fn marker(&self) -> char {
        match self {
            Op::Match => '|',
            Op::Mismatch => ':',
            Op::GapFirst | Op::GapSecond => ' ',
        }
    }

    /// Number of symbols consumed in the (first, second) sequence.
    pub fn consumes(&self) -> (usize, usize) {
        match self {
            Op::GapFirst => (0, 1),
            Op::GapSecond => (1, 0),
            Op::Match | Op::Mismatch => (1, 1),
        }
    }
}
