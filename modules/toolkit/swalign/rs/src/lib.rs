pub use config::{Config, ConfigBuilder};
pub use runner::{run, PairReport};

pub mod config;
pub mod generate;
pub mod input;
pub mod report;
pub mod runner;
