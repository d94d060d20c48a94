//! Profile Scout Sources
//!
//! Interchangeable profile data sources behind one trait:
//! - **Api**: structured JSON profile endpoint (primary)
//! - **Markup**: scrapes the embedded payload from the profile page (fallback)
//!
//! [`ProfileFetcher`] walks the sources in order until one yields a record.

pub mod traits;
pub mod payload;
pub mod api;
pub mod markup;
pub mod fetcher;

pub use traits::*;
pub use api::*;
pub use markup::*;
pub use fetcher::*;
