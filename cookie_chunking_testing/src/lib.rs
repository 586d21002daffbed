//! Utilities for exercising [`ChunkingCookieManager`](cookie_chunking::ChunkingCookieManager)
//! against a simulated browser during tests.
//!
//! [`BrowserJar`] applies staged `Set-Cookie` values the way a user agent
//! would, then replays the surviving cookies as the next request.
//!
//! ```rust
//! use cookie_chunking::{ChunkingCookieManager, CookieOptions, ResponseCookies};
//! use cookie_chunking_testing::BrowserJar;
//!
//! let manager = ChunkingCookieManager::new();
//! let mut response = ResponseCookies::new();
//! manager
//!     .append_response_cookie(&mut response, "id", "value", &CookieOptions::default())
//!     .unwrap();
//!
//! let mut browser = BrowserJar::new();
//! browser.apply_response(&response);
//! assert_eq!(manager.request_cookie(&browser.request(), "id").unwrap().as_deref(), Some("value"));
//! ```

pub mod browser;
pub mod logging;

pub use browser::BrowserJar;
pub use logging::{LoggerHandle, logger};
