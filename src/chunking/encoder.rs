//! Outbound path: split a cookie value into a marker plus continuation cookies.

use log::debug;

use super::{ChunkCount, ChunkingCookieManager, CookieOptions, chunk_name};
use crate::{
    error::{ChunkingError, Result},
    store::ResponseCookieSink,
};

/// Smallest chunk size, beyond the template, that still carries data
/// alongside a chunk index.
const MIN_CHUNK_ROOM: usize = 10;

/// Characters reserved in each chunk for the `C<index>` name suffix.
///
/// Indices of three or more digits exceed this reservation by design of the
/// wire format; the constant is kept for compatibility with stored cookies.
const CHUNK_ID_RESERVE: usize = 3;

/// Cookie pairs produced for a single logical cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBatch {
    entries: Vec<(String, String)>,
}

impl ChunkBatch {
    fn single(name: &str, value: &str) -> Self {
        Self {
            entries: vec![(name.to_owned(), value.to_owned())],
        }
    }

    /// Name/value pairs in the order they must be appended.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] { self.entries.as_slice() }

    /// Number of cookies in the batch, including the marker.
    #[expect(
        clippy::len_without_is_empty,
        reason = "batches always hold at least one cookie"
    )]
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether the value was split into continuation cookies.
    #[must_use]
    pub fn is_chunked(&self) -> bool { self.len() > 1 }

    /// Number of continuation cookies, zero when unchunked.
    #[must_use]
    pub fn chunk_count(&self) -> usize { self.len() - 1 }

    /// Consume the batch, returning its pairs.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, String)> { self.entries }
}

impl IntoIterator for ChunkBatch {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl ChunkingCookieManager {
    /// Compute the cookies needed to carry `value` under `name`.
    ///
    /// An empty value yields a single empty cookie. A value that fits in the
    /// configured chunk size, or any value when chunking is disabled, yields
    /// a single cookie. Otherwise the batch starts with a `chunks-<N>` marker
    /// followed by `N` continuation cookies named `<name>C1` to `<name>CN`.
    ///
    /// Lengths are counted in Unicode scalar values and segments never split
    /// a character.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidArgument`] if `name` is empty, or
    /// [`ChunkingError::ChunkSizeTooSmall`] if the name and attributes leave
    /// fewer than ten characters per cookie.
    pub fn chunk_value(&self, name: &str, value: &str, options: &CookieOptions) -> Result<ChunkBatch> {
        Self::require_name(name)?;
        if value.is_empty() {
            return Ok(ChunkBatch::single(name, ""));
        }
        let Some(chunk_size) = self.chunk_size() else {
            return Ok(ChunkBatch::single(name, value));
        };

        let template_length = options.template_length(name);
        let value_length = value.chars().count();
        if chunk_size > template_length.saturating_add(value_length) {
            return Ok(ChunkBatch::single(name, value));
        }
        if chunk_size < template_length.saturating_add(MIN_CHUNK_ROOM) {
            return Err(ChunkingError::ChunkSizeTooSmall {
                chunk_size,
                template_length,
            });
        }

        let data_budget = chunk_size - template_length - CHUNK_ID_RESERVE;
        let segments = split_segments(value, data_budget);
        debug!(
            "chunking cookie: name={name}, chars={value_length}, chunks={}, budget={data_budget}",
            segments.len()
        );

        let mut entries = Vec::with_capacity(segments.len() + 1);
        entries.push((name.to_owned(), ChunkCount::marker(segments.len())));
        entries.extend(
            segments
                .into_iter()
                .enumerate()
                .map(|(offset, segment)| (chunk_name(name, offset + 1), segment.to_owned())),
        );
        Ok(ChunkBatch { entries })
    }

    /// Append `value` to `sink`, splitting it across several cookies when it
    /// exceeds the configured chunk size. Every cookie carries `options`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`chunk_value`](Self::chunk_value) and from the
    /// sink.
    pub fn append_response_cookie<S>(
        &self,
        sink: &mut S,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<()>
    where
        S: ResponseCookieSink + ?Sized,
    {
        let batch = self.chunk_value(name, value, options)?;
        for (cookie_name, cookie_value) in batch {
            sink.append(&cookie_name, &cookie_value, options)?;
        }
        Ok(())
    }
}

/// Split `value` into contiguous segments of at most `budget` characters.
pub(super) fn split_segments(value: &str, budget: usize) -> Vec<&str> {
    debug_assert!(budget > 0, "segment budget must be positive");
    let mut segments = Vec::new();
    let mut rest = value;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(budget)
            .map_or(rest.len(), |(offset, _)| offset);
        let (segment, tail) = rest.split_at(end);
        segments.push(segment);
        rest = tail;
    }
    segments
}
