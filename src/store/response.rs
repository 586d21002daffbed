//! Outbound `Set-Cookie` staging.

use std::fmt;

use crate::{chunking::CookieOptions, error::Result};

/// Destination for cookies appended to a response.
///
/// Implementations stage cookies in order. [`scrub`](Self::scrub) lets the
/// deletion path drop entries staged earlier in the same response so a
/// cookie is not both set and expired.
pub trait ResponseCookieSink {
    /// Stage a cookie called `name` with `value` and `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered cookie cannot be stored by the sink.
    fn append(&mut self, name: &str, value: &str, options: &CookieOptions) -> Result<()>;

    /// Remove every staged entry whose rendered `Set-Cookie` value satisfies
    /// `reject`, returning the number of entries removed.
    fn scrub(&mut self, reject: &dyn Fn(&str) -> bool) -> usize;
}

/// A staged outbound cookie: name, value, and the options it was written with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCookie {
    name: String,
    value: String,
    options: CookieOptions,
}

impl SetCookie {
    /// Construct a new staged cookie.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, options: CookieOptions) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options,
        }
    }

    /// Cookie name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Cookie value.
    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    /// Attributes the cookie was staged with.
    #[must_use]
    pub fn options(&self) -> &CookieOptions { &self.options }

    /// Render the `Set-Cookie` header value.
    #[must_use]
    pub fn header_value(&self) -> String { self.options.render(&self.name, &self.value) }
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.header_value()) }
}

/// In-memory response cookie collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseCookies {
    cookies: Vec<SetCookie>,
}

impl ResponseCookies {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Staged cookies in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, SetCookie> { self.cookies.iter() }

    /// Rendered `Set-Cookie` header values in append order.
    #[must_use]
    pub fn headers(&self) -> Vec<String> { self.cookies.iter().map(SetCookie::header_value).collect() }

    /// Look up the most recently staged cookie called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SetCookie> {
        self.cookies.iter().rev().find(|cookie| cookie.name == name)
    }

    /// Number of staged cookies.
    #[must_use]
    pub fn len(&self) -> usize { self.cookies.len() }

    /// Whether nothing has been staged.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.cookies.is_empty() }

    /// Consume the collection, returning the staged cookies.
    #[must_use]
    pub fn into_vec(self) -> Vec<SetCookie> { self.cookies }
}

impl ResponseCookieSink for ResponseCookies {
    fn append(&mut self, name: &str, value: &str, options: &CookieOptions) -> Result<()> {
        self.cookies
            .push(SetCookie::new(name, value, options.clone()));
        Ok(())
    }

    fn scrub(&mut self, reject: &dyn Fn(&str) -> bool) -> usize {
        let before = self.cookies.len();
        self.cookies
            .retain(|cookie| !reject(&cookie.header_value()));
        before - self.cookies.len()
    }
}

impl<'a> IntoIterator for &'a ResponseCookies {
    type Item = &'a SetCookie;
    type IntoIter = std::slice::Iter<'a, SetCookie>;

    fn into_iter(self) -> Self::IntoIter { self.cookies.iter() }
}

impl IntoIterator for ResponseCookies {
    type Item = SetCookie;
    type IntoIter = std::vec::IntoIter<SetCookie>;

    fn into_iter(self) -> Self::IntoIter { self.cookies.into_iter() }
}
