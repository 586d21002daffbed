//! Configuration used by cookie chunking and reassembly.

use serde::{Deserialize, Serialize};

/// Default maximum number of characters written into a single cookie.
///
/// Safari has the lowest known per-cookie limit (4093). The default leaves
/// room for a cookie policy layer to append `secure`, `samesite=strict`, or
/// `httponly` afterwards.
pub const DEFAULT_CHUNK_SIZE: usize = 4050;

/// Settings that bound cookie sizes and control partial-chunk handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum characters permitted per cookie, including its name and
    /// attributes. `None` disables chunking entirely.
    pub chunk_size: Option<usize>,
    /// Fail reassembly when a request is missing any chunk instead of
    /// returning the raw chunk marker.
    pub throw_for_partial_cookies: bool,
}

impl ChunkingConfig {
    /// Replace the per-cookie character budget.
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: Option<usize>) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Toggle strict reassembly of partial chunk sets.
    #[must_use]
    pub const fn with_throw_for_partial_cookies(mut self, enabled: bool) -> Self {
        self.throw_for_partial_cookies = enabled;
        self
    }

    /// Whether values may be split across several cookies.
    #[must_use]
    pub const fn chunking_enabled(&self) -> bool { self.chunk_size.is_some() }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: Some(DEFAULT_CHUNK_SIZE),
            throw_for_partial_cookies: false,
        }
    }
}
