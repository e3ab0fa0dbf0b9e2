use crate::page::Page;

/// Body overflow once a page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Auto,
    Hidden,
}

impl Overflow {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Hidden => "hidden",
        }
    }
}

/// Narrow viewports scroll the stacked homepage tiles; everything else is clipped.
#[must_use]
pub fn body_overflow(page: Page, viewport_width: f64, breakpoint_px: u32) -> Overflow {
    if page == Page::Home && viewport_width <= f64::from(breakpoint_px) {
        Overflow::Auto
    } else {
        Overflow::Hidden
    }
}

/// Whether the filter bar should be pinned at the given scroll offset.
#[must_use]
pub fn filter_bar_stuck(scroll_top: f64, original_top: f64) -> bool {
    scroll_top >= original_top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_scrolls_only_at_or_below_breakpoint() {
        assert_eq!(body_overflow(Page::Home, 700.0, 700), Overflow::Auto);
        assert_eq!(body_overflow(Page::Home, 420.0, 700), Overflow::Auto);
        assert_eq!(body_overflow(Page::Home, 701.0, 700), Overflow::Hidden);
    }

    #[test]
    fn content_pages_never_scroll_the_body() {
        for page in Page::CONTENT {
            assert_eq!(body_overflow(page, 320.0, 700), Overflow::Hidden);
        }
        assert_eq!(Overflow::Hidden.css(), "hidden");
    }

    #[test]
    fn filter_bar_sticks_from_its_original_offset() {
        assert!(!filter_bar_stuck(119.0, 120.0));
        assert!(filter_bar_stuck(120.0, 120.0));
        assert!(filter_bar_stuck(400.0, 120.0));
    }
}
