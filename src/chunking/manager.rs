//! The chunking cookie manager.

use super::ChunkingConfig;
use crate::error::{ChunkingError, Result};

/// Splits oversized cookies for responses and reassembles them from requests.
///
/// A value that does not fit in [`ChunkingConfig::chunk_size`] characters is
/// written as a marker cookie plus numbered continuation cookies:
///
/// ```text
/// Set-Cookie: CookieName=chunks-3; Path=/
/// Set-Cookie: CookieNameC1=Segment1; Path=/
/// Set-Cookie: CookieNameC2=Segment2; Path=/
/// Set-Cookie: CookieNameC3=Segment3; Path=/
/// ```
///
/// The manager holds no per-request state, so one instance can be shared
/// across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkingCookieManager {
    config: ChunkingConfig,
}

impl ChunkingCookieManager {
    /// Create a manager using [`ChunkingConfig::default`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a manager with an explicit configuration.
    #[must_use]
    pub const fn with_config(config: ChunkingConfig) -> Self { Self { config } }

    /// Return the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ChunkingConfig { &self.config }

    /// Maximum characters per cookie, or `None` when chunking is disabled.
    #[must_use]
    pub const fn chunk_size(&self) -> Option<usize> { self.config.chunk_size }

    /// Whether reassembly fails on missing chunks.
    #[must_use]
    pub const fn throw_for_partial_cookies(&self) -> bool { self.config.throw_for_partial_cookies }

    pub(super) fn require_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ChunkingError::InvalidArgument("cookie name"));
        }
        Ok(())
    }
}
