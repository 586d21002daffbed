//! A minimal user agent cookie store for round-trip tests.

use std::collections::BTreeMap;

use cookie::Cookie;
use cookie_chunking::{RequestCookieMap, ResponseCookies};
use http::{HeaderMap, header::SET_COOKIE};
use time::OffsetDateTime;

/// Stores cookies from `Set-Cookie` values and replays them on request.
///
/// Scope attributes are ignored: every stored cookie is sent back. A cookie
/// whose `Expires` lies in the past, or whose `Max-Age` is not positive, is
/// removed instead of stored.
#[derive(Clone, Debug, Default)]
pub struct BrowserJar {
    cookies: BTreeMap<String, String>,
    max_cookie_chars: Option<usize>,
}

impl BrowserJar {
    /// Create an empty jar with no per-cookie size limit.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create an empty jar that silently drops any `Set-Cookie` value longer
    /// than `max_cookie_chars` characters, as browsers do.
    #[must_use]
    pub fn with_cookie_limit(max_cookie_chars: usize) -> Self {
        Self {
            cookies: BTreeMap::new(),
            max_cookie_chars: Some(max_cookie_chars),
        }
    }

    /// Apply one rendered `Set-Cookie` value.
    ///
    /// # Panics
    ///
    /// Panics if `header` is not a parseable cookie.
    pub fn apply(&mut self, header: &str) {
        if self
            .max_cookie_chars
            .is_some_and(|limit| header.chars().count() > limit)
        {
            return;
        }
        let cookie = Cookie::parse(header).expect("valid set-cookie header");
        let expired = cookie
            .expires_datetime()
            .is_some_and(|expires| expires <= OffsetDateTime::now_utc())
            || cookie
                .max_age()
                .is_some_and(|max_age| !max_age.is_positive());
        if expired {
            self.cookies.remove(cookie.name());
        } else {
            self.cookies
                .insert(cookie.name().to_owned(), cookie.value().to_owned());
        }
    }

    /// Apply every cookie staged on an in-memory response.
    pub fn apply_response(&mut self, response: &ResponseCookies) {
        for header in response.headers() {
            self.apply(&header);
        }
    }

    /// Apply every `Set-Cookie` header of an `http` response.
    ///
    /// # Panics
    ///
    /// Panics if a header value is not valid UTF-8.
    pub fn apply_headers(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(SET_COOKIE) {
            self.apply(value.to_str().expect("utf-8 set-cookie header"));
        }
    }

    /// Forget a stored cookie, simulating a client that lost it.
    pub fn forget(&mut self, name: &str) -> Option<String> { self.cookies.remove(name) }

    /// Names of stored cookies in lexical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> { self.cookies.keys().map(String::as_str).collect() }

    /// Number of stored cookies.
    #[must_use]
    pub fn len(&self) -> usize { self.cookies.len() }

    /// Whether the jar is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.cookies.is_empty() }

    /// Build the cookies the next request would carry.
    #[must_use]
    pub fn request(&self) -> RequestCookieMap {
        self.cookies
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    /// Render the `Cookie` request header the next request would carry.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
