//! Domain models for Stockroom.
//!
//! These are the core types shared across all crates.

pub mod identity;
pub mod product;
pub mod query;
pub mod session;
