//! Pins the album filter bar once the audio page scrolls past it.

use std::cell::RefCell;

use folio_core::filter_bar_stuck;

use crate::dom::{self, EventListener};

pub const FILTER_CONTROLS: &str = ".filter-controls";
pub const AUDIO_CONTENT: &str = ".audio-content";
const STICKY_CLASS: &str = "sticky";

#[derive(Default)]
pub struct StickyFilters {
    scroll: RefCell<Option<EventListener>>,
}

impl StickyFilters {
    /// Measure the bar and (re)attach the scroll handler. Skipped quietly when
    /// either element is missing.
    pub fn install(&self) {
        let (Some(controls), Some(content)) =
            (dom::query(FILTER_CONTROLS), dom::query(AUDIO_CONTENT))
        else {
            return;
        };
        let original_top = f64::from(controls.offset_top());

        self.scroll.replace(None);

        let scroller = content.clone();
        let listener = EventListener::new(content.into(), "scroll", move |_| {
            let stuck = filter_bar_stuck(f64::from(scroller.scroll_top()), original_top);
            let classes = controls.class_list();
            let _ = if stuck {
                classes.add_1(STICKY_CLASS)
            } else {
                classes.remove_1(STICKY_CLASS)
            };
        });
        self.scroll.replace(Some(listener));
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.scroll.borrow().is_some()
    }

    /// Return the bar to its resting position.
    pub fn reset() {
        if let Some(controls) = dom::query(FILTER_CONTROLS) {
            let _ = controls.class_list().remove_1(STICKY_CLASS);
        }
    }
}
