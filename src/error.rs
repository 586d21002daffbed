//! Canonical error and result types for the crate.
//!
//! Every operation on
//! [`ChunkingCookieManager`](crate::chunking::ChunkingCookieManager) reports
//! failures through [`ChunkingError`]. Recoverable anomalies, such as a
//! malformed chunk marker, never surface here.

use thiserror::Error;

/// Errors produced while chunking, reassembling, or deleting cookies.
#[derive(Debug, Error)]
pub enum ChunkingError {
    /// A required argument was missing or empty.
    #[error("invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),
    /// The cookie name and attributes leave no room for data in a chunk.
    #[error(
        "the cookie key and options are larger than the chunk size, leaving no room for data \
         (chunk size {chunk_size}, template length {template_length})"
    )]
    ChunkSizeTooSmall {
        /// Configured maximum characters per cookie.
        chunk_size: usize,
        /// Rendered length of the cookie name and attributes.
        template_length: usize,
    },
    /// A chunked request cookie was missing one of its continuation cookies.
    #[error(
        "the chunked cookie is incomplete. Only {found} of the expected {expected} chunks were \
         found, totaling {total_chars} characters. A client size limit may have been exceeded."
    )]
    IncompleteChunkSet {
        /// Number of contiguous chunks present before the first gap.
        found: usize,
        /// Chunk count announced by the marker cookie.
        expected: usize,
        /// Characters accumulated from the chunks that were found.
        total_chars: usize,
    },
    /// A rendered `Set-Cookie` line could not be stored as a header value.
    #[error("invalid set-cookie header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// Canonical result alias used by `cookie_chunking` public APIs.
pub type Result<T> = std::result::Result<T, ChunkingError>;
