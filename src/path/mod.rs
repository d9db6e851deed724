//! Dotted-path parsing for the resolver.

mod api;
#[cfg(test)]
mod unit_tests;

pub use api::{parse_path, PathParser};
