use std::rc::Rc;

use folio_core::{Page, SiteConfig};
use yew::prelude::*;

use super::manager::PageManager;

/// Shared with every page through a `ContextProvider`.
#[derive(Clone)]
pub struct AppContext {
    pub manager: Rc<PageManager>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl AppContext {
    #[must_use]
    pub const fn new(manager: Rc<PageManager>) -> Self {
        Self { manager }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        self.manager.config()
    }

    /// Callback that starts a transition to `page`.
    #[must_use]
    pub fn navigate_to(&self, page: Page) -> Callback<MouseEvent> {
        let manager = Rc::clone(&self.manager);
        Callback::from(move |_| manager.show_page(page))
    }

    #[must_use]
    pub fn navigator(&self) -> Callback<Page> {
        let manager = Rc::clone(&self.manager);
        Callback::from(move |page| manager.show_page(page))
    }
}

/// Navigation callback from the surrounding context; a no-op outside the app.
#[hook]
pub fn use_navigator() -> Callback<Page> {
    use_context::<AppContext>().map_or_else(Callback::noop, |ctx| ctx.navigator())
}
