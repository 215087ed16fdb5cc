pub use alignable::Alignable;

mod alignable;
pub mod num;
pub mod parallelism;
