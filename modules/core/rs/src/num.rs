use std::fmt::{Debug, Display};
use std::hash::Hash;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Display + Default + Hash + Send + Sync {}

impl<T: ::num::PrimInt + Debug + Display + Default + Hash + Send + Sync> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are signed primitive integers
pub trait PrimSInt: PrimInt + ::num::Signed {}

impl<T: PrimInt + ::num::Signed> PrimSInt for T {}
