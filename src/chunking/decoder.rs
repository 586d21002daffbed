//! Inbound path: stitch continuation cookies back into the original value.

use log::warn;

use super::{ChunkCount, ChunkingCookieManager, chunk_name};
use crate::{
    error::{ChunkingError, Result},
    store::RequestCookies,
};

impl ChunkingCookieManager {
    /// Read the cookie called `name`, reassembling it if it was chunked.
    ///
    /// Unchunked cookies are returned as-is and an absent cookie yields
    /// `Ok(None)`. A value that merely looks like a malformed marker is
    /// returned literally.
    ///
    /// When a continuation cookie is missing or empty the raw `chunks-<N>`
    /// marker is returned, since the primary value may have been a false
    /// positive. With [`throw_for_partial_cookies`](Self::throw_for_partial_cookies)
    /// enabled this becomes an error instead.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidArgument`] if `name` is empty, or
    /// [`ChunkingError::IncompleteChunkSet`] under the strict policy when a
    /// chunk is missing.
    pub fn request_cookie<C>(&self, cookies: &C, name: &str) -> Result<Option<String>>
    where
        C: RequestCookies + ?Sized,
    {
        Self::require_name(name)?;
        let value = cookies.get(name);
        let Some(expected) = ChunkCount::parse(value).count() else {
            return Ok(value.map(str::to_owned));
        };

        let mut chunks: Vec<&str> = Vec::new();
        for index in 1..=expected {
            match cookies.get(&chunk_name(name, index)) {
                Some(chunk) if !chunk.is_empty() => chunks.push(chunk),
                _ => {
                    let found = index - 1;
                    let total_chars: usize = chunks.iter().map(|chunk| chunk.chars().count()).sum();
                    if self.throw_for_partial_cookies() {
                        return Err(ChunkingError::IncompleteChunkSet {
                            found,
                            expected,
                            total_chars,
                        });
                    }
                    warn!(
                        "incomplete chunked cookie: name={name}, found={found}, \
                         expected={expected}, chars={total_chars}"
                    );
                    return Ok(value.map(str::to_owned));
                }
            }
        }

        Ok(Some(chunks.concat()))
    }
}
