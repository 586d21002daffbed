//! Request and response cookie seams used by the chunking manager.
//!
//! The manager never touches ambient HTTP state. Callers hand it an
//! immutable [`RequestCookies`] lookup and a mutable [`ResponseCookieSink`]
//! for each operation, so the same manager can serve many requests
//! concurrently.

mod header_map;
pub mod request;
pub mod response;

pub use request::{RequestCookieMap, RequestCookies};
pub use response::{ResponseCookieSink, ResponseCookies, SetCookie};
