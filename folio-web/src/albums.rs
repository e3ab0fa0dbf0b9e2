//! Fetch-backed album source and the grid's reducer state.

use std::rc::Rc;

use folio_core::{AlbumFilter, AlbumRecord, AlbumSource, FilterState};
use wasm_bindgen_futures::JsFuture;
use yew::functional::Reducible;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Reads the album list from the static JSON file next to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchAlbumSource {
    url: String,
}

impl FetchAlbumSource {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AlbumSource for FetchAlbumSource {
    type Error = WebDataError;

    async fn fetch(&self) -> Result<Vec<AlbumRecord>, Self::Error> {
        let network =
            |err: wasm_bindgen::JsValue| WebDataError::Network(dom::js_error_message(&err));

        let response = dom::fetch_response(&self.url).await.map_err(network)?;
        if !response.ok() {
            return Err(WebDataError::Status {
                status: response.status(),
                url: self.url.clone(),
            });
        }
        let body = JsFuture::from(response.json().map_err(network)?)
            .await
            .map_err(|err| WebDataError::Decode(dom::js_error_message(&err)))?;
        serde_wasm_bindgen::from_value(body).map_err(|err| WebDataError::Decode(err.to_string()))
    }
}

pub enum GridAction {
    Loaded(Rc<[AlbumRecord]>),
    Filter(AlbumFilter),
}

/// Everything the audio page's grid renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlbumGridState {
    pub catalog: Rc<[AlbumRecord]>,
    pub view: FilterState,
}

impl Reducible for AlbumGridState {
    type Action = GridAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Re-showing the page hands back the same collection; keep the active filter.
            GridAction::Loaded(albums) if Rc::ptr_eq(&albums, &self.catalog) => self,
            GridAction::Loaded(albums) => Rc::new(Self {
                view: FilterState::showing_all(&albums),
                catalog: albums,
            }),
            GridAction::Filter(filter) => {
                let mut view = self.view.clone();
                view.apply(&self.catalog, filter);
                Rc::new(Self {
                    catalog: Rc::clone(&self.catalog),
                    view,
                })
            }
        }
    }
}
