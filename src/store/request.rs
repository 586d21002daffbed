//! Read-only lookup of the cookies sent with a request.

use std::collections::{BTreeMap, HashMap};

use cookie::{Cookie, CookieJar};
use http::{HeaderMap, header::COOKIE};
use log::warn;

/// Read-only view of request cookies keyed by name.
pub trait RequestCookies {
    /// Return the value of the cookie called `name`, if present.
    fn get(&self, name: &str) -> Option<&str>;
}

impl RequestCookies for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> { HashMap::get(self, name).map(String::as_str) }
}

impl RequestCookies for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> { BTreeMap::get(self, name).map(String::as_str) }
}

impl RequestCookies for CookieJar {
    fn get(&self, name: &str) -> Option<&str> { CookieJar::get(self, name).map(Cookie::value) }
}

/// Owned request cookies parsed from `Cookie` headers.
///
/// When a name appears more than once, the first occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestCookieMap {
    cookies: HashMap<String, String>,
}

impl RequestCookieMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parse a single `Cookie` header value such as `a=1; b=2`.
    ///
    /// Pairs that fail to parse are skipped and logged.
    #[must_use]
    pub fn parse_header(header: &str) -> Self {
        let mut map = Self::new();
        map.extend_from_header(header);
        map
    }

    /// Collect every `Cookie` header present in `headers`.
    ///
    /// Header values that are not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut map = Self::new();
        for value in headers.get_all(COOKIE) {
            match value.to_str() {
                Ok(header) => map.extend_from_header(header),
                Err(err) => warn!("skipping non-UTF-8 cookie header: error={err}"),
            }
        }
        map
    }

    /// Insert or replace a cookie.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    /// Remove a cookie, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> { self.cookies.remove(name) }

    /// Number of cookies held.
    #[must_use]
    pub fn len(&self) -> usize { self.cookies.len() }

    /// Whether no cookies are held.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.cookies.is_empty() }

    fn extend_from_header(&mut self, header: &str) {
        for parsed in Cookie::split_parse(header) {
            match parsed {
                Ok(cookie) => {
                    self.cookies
                        .entry(cookie.name().to_owned())
                        .or_insert_with(|| cookie.value().to_owned());
                }
                Err(err) => warn!("skipping malformed request cookie: error={err}"),
            }
        }
    }
}

impl RequestCookies for RequestCookieMap {
    fn get(&self, name: &str) -> Option<&str> { self.cookies.get(name).map(String::as_str) }
}

impl<K, V> FromIterator<(K, V)> for RequestCookieMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cookies: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
