pub use swalign_core_rs::Alignable;

use swalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Pairwise alignment score - any signed primitive integer.
/// Scores are compared for exact equality when ranking alignments, hence no floats.
pub trait Score: PrimSInt {}

impl<T: PrimSInt> Score for T {}
