//! RelayMesh Core Types
//!
//! This crate defines the fundamental data structures used throughout the
//! RelayMesh client SDK: sessions, service nodes, relay requests and proofs.

mod config;
mod error;
mod types;

pub use config::*;
pub use error::*;
pub use types::*;
