//! Common utilities for the Selkie selector builder.
//!
//! This crate provides shared infrastructure used by the builder crates:
//! - **Warning System** - colored, deduplicated terminal output for
//!   input the builder accepts but cannot vouch for

pub mod warning;
