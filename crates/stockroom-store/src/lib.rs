//! Stockroom Store — durable key-value surfaces and the static
//! collaborators backing the dashboard.
//!
//! This crate provides:
//! - Key-value surfaces ([`MemoryKeyValueStore`], [`FileKeyValueStore`])
//! - The authentication directory ([`StaticCredentialDirectory`])
//! - The product catalog ([`StaticCatalog`])
//! - Seed data ([`seed`])

mod catalog;
mod config;
mod directory;
mod error;
mod kv;
pub mod seed;

pub use catalog::StaticCatalog;
pub use config::StoreConfig;
pub use directory::{SeedAccount, StaticCredentialDirectory};
pub use error::StoreError;
pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
