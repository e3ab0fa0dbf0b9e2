use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Page, SiteConfig, Ticket, TransitionStep, Transitioner};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseReducerDispatcher;

use crate::albums::{AlbumGridState, FetchAlbumSource};
use crate::app::registry::{AudioPageController, PageRegistry};
use crate::dom;
use crate::paths::asset_path;
use crate::router::{HashRouter, RouteListeners};
use crate::transitions;

/// Application context: built once by the root component and handed to
/// whatever needs to navigate.
pub struct PageManager {
    config: SiteConfig,
    router: HashRouter,
    transitions: RefCell<Transitioner>,
    pages: PageRegistry,
}

impl PageManager {
    #[must_use]
    pub fn new(config: SiteConfig, grid: UseReducerDispatcher<AlbumGridState>) -> Self {
        let source = FetchAlbumSource::new(asset_path(&config.albums_path));
        Self {
            config,
            router: HashRouter,
            transitions: RefCell::new(Transitioner::default()),
            pages: PageRegistry::new(AudioPageController::new(source, grid)),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// The last page a transition completed on.
    #[must_use]
    pub fn current_page(&self) -> Page {
        self.transitions.borrow().current()
    }

    /// Attach the route listeners and show the page the URL points at.
    #[must_use = "dropping the listeners detaches routing"]
    pub fn start(self: &Rc<Self>) -> RouteListeners {
        let manager = Rc::downgrade(self);
        let listeners = self.router.listen(move || {
            if let Some(manager) = manager.upgrade() {
                manager.handle_route();
            }
        });
        self.handle_route();
        listeners
    }

    pub fn handle_route(self: &Rc<Self>) {
        self.show_page(self.router.current_page());
    }

    /// Transition to `page`, superseding any transition still running.
    pub fn show_page(self: &Rc<Self>, page: Page) {
        let Some(ticket) = self.transitions.borrow_mut().begin(page) else {
            return;
        };
        let manager = Rc::clone(self);
        spawn_local(async move { manager.run(ticket).await });
    }

    #[allow(clippy::future_not_send)]
    async fn run(self: Rc<Self>, ticket: Ticket) {
        let steps = self
            .transitions
            .borrow()
            .plan(ticket, &self.config, dom::viewport_width());

        for step in steps {
            let proceed = self.transitions.borrow_mut().record(ticket, &step);
            if !proceed {
                log::debug!("transition to {} superseded", ticket.target);
                return;
            }
            self.execute(ticket, step).await;
        }
    }

    #[allow(clippy::future_not_send)]
    async fn execute(self: &Rc<Self>, ticket: Ticket, step: TransitionStep) {
        match step {
            TransitionStep::WaitCursor => dom::set_body_style("cursor", "wait"),
            TransitionStep::ResetStyles => transitions::reset_styles(),
            TransitionStep::FadeOutVisible => transitions::fade_out_visible(),
            TransitionStep::ScheduleCursorReset(delay_ms) => {
                let manager = Rc::downgrade(self);
                spawn_local(async move {
                    if let Err(err) = dom::sleep_ms(delay_ms).await {
                        log::warn!("cursor timer failed: {}", dom::js_error_message(&err));
                    }
                    if manager
                        .upgrade()
                        .is_some_and(|m| m.transitions.borrow().is_current(ticket))
                    {
                        dom::set_body_style("cursor", "default");
                    }
                });
            }
            TransitionStep::Wait(delay_ms) => {
                if let Err(err) = dom::sleep_ms(delay_ms).await {
                    log::warn!("fade-out timer failed: {}", dom::js_error_message(&err));
                }
            }
            TransitionStep::HideContentPages => transitions::hide_content_pages(),
            TransitionStep::Reveal(reveal) => transitions::reveal(&reveal),
            TransitionStep::Show(page) => self.pages.show(page).await,
            TransitionStep::NextFrame => {
                if let Err(err) = dom::next_animation_frame().await {
                    log::warn!("animation frame failed: {}", dom::js_error_message(&err));
                }
            }
            TransitionStep::FadeIn { page, to } => transitions::fade_in(page, to),
            TransitionStep::SyncUrl(page) => self.router.sync(page),
            TransitionStep::Commit(page) => log::debug!("showing {page}"),
        }
    }
}
