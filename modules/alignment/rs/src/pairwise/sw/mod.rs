pub use engine::{Engine, Filters, Outcome, Selection};
pub use index::ScoreIndex;
pub use matrix::{Cell, ScoreMatrix};
pub use storage::{scan, Seed};

mod engine;
mod index;
mod matrix;
pub mod storage;
pub mod traceback;
