//! # Collection Queries & Pattern Matching
//!
//! Two console demos built on a small library.
//!
//! ## Modules
//!
//! 1. **Query Pipeline** (`query`)
//!    - Lazy stages: filter, map, take, sort_by, group_by
//!    - Terminal operations: count, sum, average, min/max, first/last
//!    - Deferred execution over a shared, mutable `Source`
//!
//! 2. **Pattern Matching** (`pattern`)
//!    - Validation loop that re-prompts on rejected input
//!    - Match-testing loop
//!    - Capture-group substitution
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin query_demo
//! cargo run --bin pattern_demo
//!
//! # optional config and logging
//! QUERY_DEMOS_CONFIG=demos.toml RUST_LOG=query_demos=debug cargo run --bin query_demo
//! ```

pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod product;
pub mod query;

pub use error::{Error, Result};
