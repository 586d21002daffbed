#![doc(html_root_url = "https://docs.rs/cookie_chunking/latest")]
//! Public API for the `cookie_chunking` library.
//!
//! This crate splits cookie values that exceed a per-cookie character budget
//! into a primary cookie plus numbered continuation cookies, reassembles them
//! from request cookies, and expires every chunk on deletion.

pub mod chunking;
pub mod error;
pub mod store;

pub use chunking::{
    CHUNK_COUNT_PREFIX,
    CHUNK_KEY_SUFFIX,
    ChunkBatch,
    ChunkCount,
    ChunkingConfig,
    ChunkingCookieManager,
    CookieOptions,
    DEFAULT_CHUNK_SIZE,
    MAX_CHUNK_COUNT,
    SameSite,
    StagedCookieFilter,
    chunk_name,
};
pub use error::{ChunkingError, Result};
pub use store::{RequestCookieMap, RequestCookies, ResponseCookieSink, ResponseCookies, SetCookie};
