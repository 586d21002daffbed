//! Cookie metadata shared by every chunk of a logical cookie.
//!
//! [`CookieOptions`] doubles as the header template used to measure the fixed
//! overhead of a `Set-Cookie` line: the cookie name and attributes rendered
//! with an empty value.

pub use cookie::SameSite;
use cookie::Cookie;
use time::{Duration, OffsetDateTime};

/// Attributes applied to every cookie appended by the chunking manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    /// `Domain` attribute. Empty strings are treated as unset.
    pub domain: Option<String>,
    /// `Path` attribute. Defaults to `/`.
    pub path: Option<String>,
    /// Absolute `Expires` timestamp.
    pub expires: Option<OffsetDateTime>,
    /// `SameSite` policy; `None` omits the attribute.
    pub same_site: Option<SameSite>,
    /// Emit the `HttpOnly` flag.
    pub http_only: bool,
    /// Emit the `Secure` flag.
    pub secure: bool,
    /// Relative `Max-Age` lifetime.
    pub max_age: Option<Duration>,
    /// Whether the cookie is essential and bypasses consent checks. This flag
    /// never appears on the wire.
    pub essential: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            domain: None,
            path: Some("/".to_owned()),
            expires: None,
            same_site: None,
            http_only: false,
            secure: false,
            max_age: None,
            essential: false,
        }
    }
}

impl CookieOptions {
    /// Set the `Domain` attribute.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set or clear the `Path` attribute.
    #[must_use]
    pub fn with_path(mut self, path: Option<&str>) -> Self {
        self.path = path.map(str::to_owned);
        self
    }

    /// Set the `Expires` attribute.
    #[must_use]
    pub fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set the `SameSite` policy.
    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    /// Toggle the `HttpOnly` flag.
    #[must_use]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Toggle the `Secure` flag.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the `Max-Age` attribute.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Mark the cookie as essential.
    #[must_use]
    pub fn with_essential(mut self, essential: bool) -> Self {
        self.essential = essential;
        self
    }

    /// Return the domain when it is set and non-empty.
    #[must_use]
    pub fn domain(&self) -> Option<&str> { self.domain.as_deref().filter(|d| !d.is_empty()) }

    /// Return the path when it is set and non-empty.
    #[must_use]
    pub fn path(&self) -> Option<&str> { self.path.as_deref().filter(|p| !p.is_empty()) }

    /// Build a [`Cookie`] carrying `name`, `value`, and these attributes.
    #[must_use]
    pub fn to_cookie(&self, name: &str, value: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(name.to_owned(), value.to_owned());
        if let Some(domain) = self.domain() {
            cookie.set_domain(domain.to_owned());
        }
        if let Some(path) = self.path() {
            cookie.set_path(path.to_owned());
        }
        if let Some(expires) = self.expires {
            cookie.set_expires(expires);
        }
        if let Some(max_age) = self.max_age {
            cookie.set_max_age(max_age);
        }
        cookie.set_same_site(self.same_site);
        cookie.set_http_only(self.http_only);
        cookie.set_secure(self.secure);
        cookie
    }

    /// Render a `Set-Cookie` header value for `name` and `value`.
    #[must_use]
    pub fn render(&self, name: &str, value: &str) -> String {
        self.to_cookie(name, value).to_string()
    }

    /// Character length of the rendered header with an empty value.
    ///
    /// Lengths are counted in Unicode scalar values, matching how cookie
    /// values are measured during chunking.
    #[must_use]
    pub fn template_length(&self, name: &str) -> usize { self.render(name, "").chars().count() }

    /// Options used to expire a cookie previously written with `self`.
    ///
    /// Scope and security flags are preserved; the expiry is moved to the
    /// Unix epoch and any `Max-Age` is dropped.
    #[must_use]
    pub fn expired(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            path: self.path.clone(),
            expires: Some(OffsetDateTime::UNIX_EPOCH),
            same_site: self.same_site,
            http_only: self.http_only,
            secure: self.secure,
            max_age: None,
            essential: self.essential,
        }
    }
}
