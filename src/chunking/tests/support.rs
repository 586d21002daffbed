//! Helpers shared by the chunking unit tests.

use std::collections::HashMap;

use crate::chunking::{ChunkBatch, ChunkingConfig, ChunkingCookieManager, CookieOptions};

/// Manager with an explicit chunk size and partial-cookie policy.
pub fn manager(chunk_size: Option<usize>, strict: bool) -> ChunkingCookieManager {
    ChunkingCookieManager::with_config(
        ChunkingConfig::default()
            .with_chunk_size(chunk_size)
            .with_throw_for_partial_cookies(strict),
    )
}

/// Options whose rendered template for `Big` is exactly 15 characters:
/// `Big=; Path=/abc`.
pub fn fifteen_char_template() -> CookieOptions { CookieOptions::default().with_path(Some("/abc")) }

/// Turn a batch into the request cookies a browser would send back.
pub fn as_request(batch: &ChunkBatch) -> HashMap<String, String> {
    batch.entries().iter().cloned().collect()
}

/// A value made of `len` repetitions of `ch`.
pub fn repeated(ch: char, len: usize) -> String { std::iter::repeat_n(ch, len).collect() }
