//! Stockroom Core — domain models, collaborator traits and the catalog
//! filter engine shared by every other crate.

pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod stats;
