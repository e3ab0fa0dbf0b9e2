//! Hash routing against the browser's location and history.

use std::rc::Rc;

use folio_core::{Page, decode_fragment, history_push_for};
use wasm_bindgen::JsValue;

use crate::dom::{self, EventListener};

/// Keeps both route listeners alive; dropping it detaches them.
pub struct RouteListeners {
    _popstate: EventListener,
    _hashchange: EventListener,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashRouter;

impl HashRouter {
    #[must_use]
    pub fn current_hash(self) -> String {
        dom::window().location().hash().unwrap_or_default()
    }

    /// Page addressed by the current URL.
    #[must_use]
    pub fn current_page(self) -> Page {
        decode_fragment(&self.current_hash())
    }

    /// Push a history entry for `page` unless the URL already shows it.
    pub fn sync(self, page: Page) {
        let Some(target) = history_push_for(page, &self.current_hash()) else {
            return;
        };
        let window = dom::window();
        let url = if target.is_empty() {
            window.location().pathname().unwrap_or_else(|_| String::from("/"))
        } else {
            target
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = pushed {
            log::error!("failed to push {url}: {}", dom::js_error_message(&err));
        }
    }

    /// Run `on_route` for back/forward navigation and for fragment edits alike.
    pub fn listen(self, on_route: impl Fn() + 'static) -> RouteListeners {
        let on_route = Rc::new(on_route);
        let target: web_sys::EventTarget = dom::window().into();
        let popstate = {
            let on_route = Rc::clone(&on_route);
            EventListener::new(target.clone(), "popstate", move |_| on_route())
        };
        let hashchange = EventListener::new(target, "hashchange", move |_| on_route());
        RouteListeners {
            _popstate: popstate,
            _hashchange: hashchange,
        }
    }
}
