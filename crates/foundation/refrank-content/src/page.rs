//! Page identifiers and their addresses

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the four content pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Home,
    About,
    Results,
    Team,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Results, Page::Team];

    /// Page identifier, used for highlighting and in HTMX queries
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Results => "Results",
            Page::Team => "Team",
        }
    }

    /// Navigable address for this page
    pub fn url(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Results => "/results",
            Page::Team => "/team",
        }
    }

    /// Document title suffix
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Academic Reference Quality Scoring",
            Page::About => "About",
            Page::Results => "Model Results",
            Page::Team => "Meet the Team",
        }
    }

    /// Resolve a URL path segment. Case-insensitive, `home` is accepted too.
    pub fn from_slug(slug: &str) -> Option<Page> {
        let slug = slug.trim_matches('/');
        Page::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for page in Page::ALL {
            assert_eq!(page.name().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("about".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());

        let err = "Blog".parse::<Page>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown page identifier: Blog");
    }

    #[test]
    fn test_urls() {
        assert_eq!(Page::Home.url(), "/");
        assert_eq!(Page::About.url(), "/about");
        assert_eq!(Page::Results.url(), "/results");
        assert_eq!(Page::Team.url(), "/team");
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(Page::from_slug("about"), Some(Page::About));
        assert_eq!(Page::from_slug("RESULTS"), Some(Page::Results));
        assert_eq!(Page::from_slug("/team/"), Some(Page::Team));
        assert_eq!(Page::from_slug("home"), Some(Page::Home));
        assert_eq!(Page::from_slug("contact"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Page::Results.to_string(), "Results");
    }
}
