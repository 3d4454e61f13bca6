//! Layout shell: top navigation, mobile menu, footer
//!
//! Pages render to a content fragment first, then [`wrap_page`] places the
//! fragment inside the full document.

use askama::Template;
use refrank_content::{MobileMenu, Page, COPYRIGHT, NAV_ITEMS, SITE_NAME};

use crate::error::Result;

/// A rendered navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Links for every navigation entry, highlighted against `current`
pub fn nav_links(current: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|item| NavLink {
            label: item.label,
            href: item.url().to_string(),
            active: item.is_active(current),
        })
        .collect()
}

/// Address of `page` as it renders with `menu` in the given state
pub fn page_href(page: Page, menu: MobileMenu) -> String {
    if menu.is_open() {
        format!("{}?menu=open", page.url())
    } else {
        page.url().to_string()
    }
}

/// Panel links point at the state after following them
fn panel_links(current: &str, menu: MobileMenu) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let mut next = menu;
            let target = next.follow_link(item);
            NavLink {
                label: item.label,
                href: page_href(target, next),
                active: item.is_active(current),
            }
        })
        .collect()
}

#[derive(Template)]
#[template(path = "partials/mobile_menu.html")]
struct MobileMenuPartial {
    links: Vec<NavLink>,
    open: bool,
    /// Identifier echoed back on the next toggle, empty for unknown pages
    page: &'static str,
    /// No-JS fallback for the toggle
    toggle_href: String,
}

/// Toggle button plus the collapsible panel
pub fn render_mobile_menu(current: &str, menu: MobileMenu) -> Result<String> {
    let known = current.parse::<Page>().ok();
    let mut toggled = menu;
    toggled.toggle();
    let partial = MobileMenuPartial {
        links: panel_links(current, menu),
        open: menu.is_open(),
        page: known.map(Page::name).unwrap_or(""),
        toggle_href: page_href(known.unwrap_or(Page::Home), toggled),
    };
    Ok(partial.render()?)
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    site_name: &'static str,
    home_url: &'static str,
    nav: Vec<NavLink>,
    mobile_menu: String,
    content: &'a str,
    copyright: &'static str,
    htmx_src: &'a str,
}

/// Wrap a content fragment in the full page shell
pub fn wrap_page(
    title: &str,
    current: &str,
    menu: MobileMenu,
    content: &str,
    htmx_src: &str,
) -> Result<String> {
    let layout = LayoutTemplate {
        title,
        site_name: SITE_NAME,
        home_url: Page::Home.url(),
        nav: nav_links(current),
        mobile_menu: render_mobile_menu(current, menu)?,
        content,
        copyright: COPYRIGHT,
        htmx_src,
    };
    Ok(layout.render()?)
}
