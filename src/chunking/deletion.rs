//! Deletion path: expire a cookie and every chunk the request says it has.

use log::debug;

use super::{ChunkCount, ChunkingCookieManager, CookieOptions, chunk_name};
use crate::{
    error::Result,
    store::{RequestCookies, ResponseCookieSink},
};

/// Matches staged `Set-Cookie` values that a deletion supersedes.
///
/// A header matches when it starts with `<key>=` for the primary name or one
/// of its chunk names (ASCII case-insensitive). Chunk names run one past the
/// announced count so a value staged with an extra chunk is also caught. If the deletion names a
/// domain, the header must also contain `domain=<domain>`, compared without
/// a leading dot as the `cookie` crate renders it. Otherwise, if it
/// names a path, the header must contain `path=<path>`. With neither, the
/// name match alone decides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedCookieFilter {
    prefixes: Vec<String>,
    qualifier: Option<String>,
}

impl StagedCookieFilter {
    /// Build a filter for `name` and chunks `1..=chunk_count + 1` scoped by
    /// `options`.
    #[must_use]
    pub fn new(name: &str, chunk_count: usize, options: &CookieOptions) -> Self {
        let prefixes = std::iter::once(format!("{name}="))
            .chain((1..=chunk_count + 1).map(|index| format!("{}=", chunk_name(name, index))))
            .map(|prefix| prefix.to_ascii_lowercase())
            .collect();
        let qualifier = options
            .domain()
            .map(|domain| format!("domain={}", domain.trim_start_matches('.')))
            .or_else(|| options.path().map(|path| format!("path={path}")))
            .map(|qualifier| qualifier.to_ascii_lowercase());
        Self {
            prefixes,
            qualifier,
        }
    }

    /// Whether the staged `header` value should be removed.
    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        let named = self.prefixes.iter().any(|prefix| {
            header
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        });
        if !named {
            return false;
        }
        match &self.qualifier {
            Some(qualifier) => header.to_ascii_lowercase().contains(qualifier.as_str()),
            None => true,
        }
    }
}

impl ChunkingCookieManager {
    /// Expire the cookie called `name` along with any chunks announced by the
    /// request's marker cookie.
    ///
    /// Entries already staged on `sink` for the same cookies and scope are
    /// scrubbed first so the response does not both set and expire them.
    /// Each expiration carries an empty value, an `Expires` at the Unix
    /// epoch, and the caller's domain, path, `SameSite`, `Secure`,
    /// `HttpOnly`, and essential settings.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidArgument`](crate::ChunkingError::InvalidArgument)
    /// if `name` is empty, or propagates sink errors.
    pub fn delete_cookie<C, S>(
        &self,
        cookies: &C,
        sink: &mut S,
        name: &str,
        options: &CookieOptions,
    ) -> Result<()>
    where
        C: RequestCookies + ?Sized,
        S: ResponseCookieSink + ?Sized,
    {
        Self::require_name(name)?;
        let chunk_count = ChunkCount::parse(cookies.get(name)).count().unwrap_or(0);

        let filter = StagedCookieFilter::new(name, chunk_count, options);
        let scrubbed = sink.scrub(&|header| filter.matches(header));
        debug!("deleting cookie: name={name}, chunks={chunk_count}, scrubbed={scrubbed}");

        let expired = options.expired();
        sink.append(name, "", &expired)?;
        for index in 1..=chunk_count {
            sink.append(&chunk_name(name, index), "", &expired)?;
        }
        Ok(())
    }
}
