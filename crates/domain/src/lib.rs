//! Domain layer for CR Console.
//!
//! This crate contains:
//! - Entity records exchanged with the remote tracking API
//! - Mutation payloads with declarative validation
//! - Report filter state and its query-pair construction

pub mod filters;
pub mod models;
