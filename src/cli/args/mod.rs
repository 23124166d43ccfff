//! Shared CLI argument types

mod common;
mod global;
mod search;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use search::SearchArgs;
