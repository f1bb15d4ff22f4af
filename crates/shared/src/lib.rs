//! Shared utilities for CR Console.
//!
//! This crate provides the small pieces used across the other crates:
//! - Placeholder formatting for missing/null table cells
//! - Query-pair construction for filtered requests and exports

pub mod placeholder;
pub mod query;
