//! crumb: attach to a running Chromium over the DevTools protocol and read
//! the cookies a page can see.
//!
//! The protocol itself is delegated to chromiumoxide; this crate owns
//! endpoint discovery, the page-selection policy, the network-idle
//! completion condition, and the cookie snapshot types.
//!
//! ```ignore
//! use crumb_core::{DebugEndpoint, IdlePolicy, Session};
//!
//! # async fn run() -> crumb_core::Result<()> {
//! let endpoint = DebugEndpoint::parse("127.0.0.1:9222")?;
//! let session = Session::attach(&endpoint).await?;
//! let (page, _origin) = session.first_or_new_page().await?;
//! crumb_core::goto_and_settle(&page, "https://www.riffusion.com/", &IdlePolicy::default()).await?;
//! for cookie in crumb_core::page_cookies(&page).await? {
//!     println!("{}: {}", cookie.name, cookie.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cookie;
pub mod endpoint;
pub mod error;
pub mod idle;
pub mod session;

pub use chromiumoxide::Page;
pub use cookie::{CookieRecord, page_cookies};
pub use endpoint::{DEFAULT_ENDPOINT, DebugEndpoint, VersionInfo};
pub use error::{Error, Result};
pub use idle::{IdlePolicy, goto_and_settle};
pub use session::{PageOrigin, Session};
