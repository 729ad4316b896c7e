pub mod calculator;
pub mod stats;

pub use stats::Report;
