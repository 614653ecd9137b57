//! Scroll geometry: anchor offsets, visibility thresholds, nav breakpoint.

/// Share of a section that must be visible for its nav link to become active
pub const SCROLLSPY_THRESHOLD: f64 = 0.28;

/// Share of a `.reveal` element that must be visible before it animates in
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Viewport width above which the mobile nav is always closed
pub const NAV_BREAKPOINT_PX: f64 = 900.0;

/// Gap left between the sticky nav and a scrolled-to section
pub const SCROLL_MARGIN_PX: f64 = 8.0;

/// Where a scroll effect should land
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(String),
}

/// Section id for an in-page link (`#about` → `about`).
///
/// Links to other pages, or a bare `#`, are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so that a section sits just below the nav.
///
/// `target_top` is the section's viewport-relative top, `page_offset` the
/// current vertical scroll position.
pub fn section_scroll_top(target_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    target_top + page_offset - nav_height - SCROLL_MARGIN_PX
}

pub fn is_wide_viewport(width: f64) -> bool {
    width > NAV_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/cv.pdf"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn scroll_top_accounts_for_nav_and_margin() {
        assert_eq!(section_scroll_top(400.0, 1000.0, 64.0), 1328.0);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!is_wide_viewport(900.0));
        assert!(is_wide_viewport(901.0));
    }
}
