//! Navigation Chrome
//!
//! Site header behaviour: which link is highlighted for the current page,
//! the mobile menu toggle, and what a click on a link should do.

/// Delay before leaving the page so the fade-out can play
pub const PAGE_TRANSITION_MS: u32 = 300;

/// Page assumed when the path has no last segment
pub const INDEX_PAGE: &str = "index.html";

/// Anchor that stands for the index page
pub const HOME_ANCHOR: &str = "#home";

/// A header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links shown in the site header
pub const SITE_LINKS: [NavLink; 4] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "booking", label: "Book Now" },
    NavLink { href: "dashboard", label: "Dashboard" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Last path segment of the current location, or `index.html` for a bare directory
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => INDEX_PAGE,
    }
}

/// Whether `href` should be highlighted on `path`
pub fn is_active(href: &str, path: &str) -> bool {
    let page = current_page(path);
    href == page || (page == INDEX_PAGE && href == HOME_ANCHOR)
}

/// Index of the highlighted link, if any
pub fn active_link(links: &[NavLink], path: &str) -> Option<usize> {
    links.iter().position(|link| is_active(link.href, path))
}

/// What a click on a link does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// In-page anchor: smooth-scroll to the element with this id
    ScrollTo(String),
    /// Another page: fade out, then navigate after `delay_ms`
    Navigate { href: String, delay_ms: u32 },
}

pub fn classify_link(href: &str) -> LinkAction {
    match href.strip_prefix('#') {
        Some(id) => LinkAction::ScrollTo(id.to_string()),
        None => LinkAction::Navigate {
            href: href.to_string(),
            delay_ms: PAGE_TRANSITION_MS,
        },
    }
}

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/salon/booking"), "booking");
        assert_eq!(current_page("/"), INDEX_PAGE);
        assert_eq!(current_page(""), INDEX_PAGE);
        assert_eq!(current_page("/salon/"), INDEX_PAGE);
    }

    #[test]
    fn test_home_anchor_active_on_index() {
        assert!(is_active("#home", "/"));
        assert!(!is_active("#home", "/booking"));
        assert_eq!(active_link(&SITE_LINKS, "/"), Some(0));
    }

    #[test]
    fn test_page_link_active() {
        assert_eq!(active_link(&SITE_LINKS, "/dashboard"), Some(2));
        assert_eq!(active_link(&SITE_LINKS, "/about"), None);
    }

    #[test]
    fn test_classify_link() {
        assert_eq!(classify_link("#contact"), LinkAction::ScrollTo("contact".to_string()));
        assert_eq!(
            classify_link("/booking"),
            LinkAction::Navigate {
                href: "/booking".to_string(),
                delay_ms: 300
            }
        );
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
