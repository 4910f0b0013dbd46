//! Schema for authored horizontal paths and tracker configuration.

#![forbid(missing_docs)]

mod path;
pub use path::*;

mod tracker;
pub use tracker::*;

#[cfg(test)]
mod tests;
