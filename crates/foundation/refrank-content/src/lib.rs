//! # RefRank Content
//!
//! Everything the RefRank site displays, as immutable literal data.
//!
//! ## Layout
//!
//! ```text
//! Page ──► NavigationItem ──► MobileMenu     (shell)
//!   │
//!   ├── home     HIGHLIGHTS, METADATA_FEATURES, SAMPLE_OUTPUT
//!   ├── about    METHODOLOGY_STEPS, FEATURE_WEIGHTS, TECHNICAL_SPECS
//!   ├── results  PERFORMANCE_METRICS, ... , SAMPLE_PREDICTIONS
//!   └── team     TEAM, PROJECT_FACTS, ACKNOWLEDGMENTS
//! ```
//!
//! Nothing here is computed at runtime beyond the score colour lookup in
//! [`ScoreBucket`]. The arrays are displayed verbatim.

pub mod about;
pub mod home;
pub mod icon;
pub mod nav;
pub mod page;
pub mod results;
pub mod score;
pub mod team;

pub use icon::Icon;
pub use nav::{MobileMenu, NavigationItem, NAV_ITEMS};
pub use page::Page;
pub use score::ScoreBucket;

/// Project name shown in the logo and headings
pub const SITE_NAME: &str = "RefRank";

/// Footer note
pub const COPYRIGHT: &str = "© 2025 RefRank — University Final Project";

/// Result type for refrank-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refrank-content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown page identifier: {0}")]
    UnknownPage(String),
}
