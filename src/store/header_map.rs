//! [`ResponseCookieSink`] over an `http` response header map.

use http::{HeaderMap, HeaderValue, header::SET_COOKIE};

use super::ResponseCookieSink;
use crate::{chunking::CookieOptions, error::Result};

impl ResponseCookieSink for HeaderMap {
    fn append(&mut self, name: &str, value: &str, options: &CookieOptions) -> Result<()> {
        let header = HeaderValue::try_from(options.render(name, value))?;
        HeaderMap::append(self, SET_COOKIE, header);
        Ok(())
    }

    fn scrub(&mut self, reject: &dyn Fn(&str) -> bool) -> usize {
        let staged: Vec<HeaderValue> = self.get_all(SET_COOKIE).iter().cloned().collect();
        if staged.is_empty() {
            return 0;
        }
        self.remove(SET_COOKIE);

        let mut removed = 0;
        for value in staged {
            // Opaque (non-UTF-8) values cannot name one of our cookies.
            if value.to_str().is_ok_and(reject) {
                removed += 1;
            } else {
                HeaderMap::append(self, SET_COOKIE, value);
            }
        }
        removed
    }
}
