//! Cookie chunking primitives.
//!
//! This module collects the types used to split oversized cookies across
//! several wire-level cookies and to reassemble or delete them. Each
//! sub-module holds one concept. The crate root re-exports the public API.

pub mod config;
pub mod decoder;
pub mod deletion;
pub mod encoder;
pub mod manager;
pub mod marker;
pub mod options;

pub use config::{ChunkingConfig, DEFAULT_CHUNK_SIZE};
pub use deletion::StagedCookieFilter;
pub use encoder::ChunkBatch;
pub use manager::ChunkingCookieManager;
pub use marker::{CHUNK_COUNT_PREFIX, CHUNK_KEY_SUFFIX, ChunkCount, MAX_CHUNK_COUNT, chunk_name};
pub use options::{CookieOptions, SameSite};
