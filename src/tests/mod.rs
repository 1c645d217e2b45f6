//! Crate-level tests grouped by topic

pub mod test_utils;
