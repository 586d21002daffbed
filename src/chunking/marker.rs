//! Parsing and formatting of the `chunks-<N>` sentinel and chunk cookie names.

/// Prefix of the marker stored under the primary cookie name.
pub const CHUNK_COUNT_PREFIX: &str = "chunks-";

/// Infix placed between the primary cookie name and a chunk index.
pub const CHUNK_KEY_SUFFIX: &str = "C";

/// Largest chunk count a marker may announce (`i32::MAX`).
pub const MAX_CHUNK_COUNT: usize = 0x7FFF_FFFF;

/// Interpretation of a primary cookie value.
///
/// # Examples
///
/// ```
/// use cookie_chunking::ChunkCount;
/// assert_eq!(ChunkCount::parse(Some("chunks-3")), ChunkCount::Chunked(3));
/// assert_eq!(ChunkCount::parse(Some("chunks-x")), ChunkCount::Malformed);
/// assert_eq!(ChunkCount::parse(Some("plain")), ChunkCount::NotChunked);
/// assert_eq!(ChunkCount::parse(None), ChunkCount::NotChunked);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkCount {
    /// The value is absent or does not start with the marker prefix.
    NotChunked,
    /// The value announces `n` continuation cookies.
    Chunked(usize),
    /// The value starts with the prefix but the remainder is not a plain
    /// non-negative integer no larger than [`MAX_CHUNK_COUNT`].
    Malformed,
}

impl ChunkCount {
    /// Classify a primary cookie value.
    ///
    /// The prefix comparison is case-sensitive. The remainder must be ASCII
    /// digits only: no sign, whitespace, or trailing characters. Counts above
    /// [`MAX_CHUNK_COUNT`] are malformed.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let Some(digits) = value.and_then(|v| v.strip_prefix(CHUNK_COUNT_PREFIX)) else {
            return Self::NotChunked;
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Malformed;
        }
        match digits.parse() {
            Ok(count) if count <= MAX_CHUNK_COUNT => Self::Chunked(count),
            _ => Self::Malformed,
        }
    }

    /// Number of continuation cookies to read, if any.
    ///
    /// Returns `None` unless the marker announced at least one chunk.
    #[must_use]
    pub const fn count(self) -> Option<usize> {
        match self {
            Self::Chunked(n) if n > 0 => Some(n),
            _ => None,
        }
    }

    /// Format the marker value announcing `count` chunks.
    #[must_use]
    pub fn marker(count: usize) -> String { format!("{CHUNK_COUNT_PREFIX}{count}") }
}

/// Name of the continuation cookie holding chunk `index` of `name`.
///
/// Indices are 1-based.
#[must_use]
pub fn chunk_name(name: &str, index: usize) -> String { format!("{name}{CHUNK_KEY_SUFFIX}{index}") }
