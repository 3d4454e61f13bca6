//! Navigation entries and the mobile menu flag

use serde::Serialize;

use crate::page::Page;

/// A link in the shared shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub page: Page,
}

impl NavigationItem {
    /// Active iff the item's page identifier equals `current`.
    /// Unknown identifiers never match.
    pub fn is_active(&self, current: &str) -> bool {
        self.page.name() == current
    }

    pub fn url(&self) -> &'static str {
        self.page.url()
    }
}

/// Navigation entries, in display order
pub static NAV_ITEMS: [NavigationItem; 4] = [
    NavigationItem { label: "Home", page: Page::Home },
    NavigationItem { label: "About", page: Page::About },
    NavigationItem { label: "Results", page: Page::Results },
    NavigationItem { label: "Team", page: Page::Team },
];

/// Number of entries highlighted for `current`: 1 for a known page, 0 otherwise
pub fn active_count(current: &str) -> usize {
    NAV_ITEMS.iter().filter(|item| item.is_active(current)).count()
}

/// Open/closed state of the collapsible mobile panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// `?menu=open` opens the panel; anything else leaves it closed
    pub fn from_query(value: Option<&str>) -> Self {
        Self::new(value == Some("open"))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the panel
    pub fn follow_link(&mut self, item: &NavigationItem) -> Page {
        self.open = false;
        item.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_for_known_page() {
        for page in Page::ALL {
            assert_eq!(active_count(page.name()), 1);
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|i| i.is_active(page.name()))
                .collect();
            assert_eq!(active[0].page, page);
        }
    }

    #[test]
    fn test_none_active_for_unknown_page() {
        assert_eq!(active_count("Blog"), 0);
        assert_eq!(active_count(""), 0);
        // Comparison is plain equality
        assert_eq!(active_count("home"), 0);
    }

    #[test]
    fn test_nav_items_cover_every_page_in_order() {
        let pages: Vec<Page> = NAV_ITEMS.iter().map(|i| i.page).collect();
        assert_eq!(pages, Page::ALL.to_vec());
        assert_eq!(NAV_ITEMS[2].url(), "/results");
    }

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        for initial in [false, true] {
            let mut menu = MobileMenu::new(initial);
            menu.toggle();
            assert_ne!(menu.is_open(), initial);
            menu.toggle();
            assert_eq!(menu.is_open(), initial);
        }
    }

    #[test]
    fn test_follow_link_closes_menu() {
        for item in &NAV_ITEMS {
            let mut menu = MobileMenu::new(true);
            let target = menu.follow_link(item);
            assert_eq!(target, item.page);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn test_from_query() {
        assert!(MobileMenu::from_query(Some("open")).is_open());
        assert!(!MobileMenu::from_query(Some("closed")).is_open());
        assert!(!MobileMenu::from_query(None).is_open());
    }
}
