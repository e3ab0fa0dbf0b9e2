use folio_core::{AlbumRepository, Page};
use yew::functional::UseReducerDispatcher;

use crate::albums::{AlbumGridState, FetchAlbumSource, GridAction};
use crate::sticky::StickyFilters;

/// Something that prepares its content when its page comes on screen.
#[allow(async_fn_in_trait)] // Pages run on the single browser thread.
pub trait Showable {
    async fn show(&self);
}

/// Loads the album catalog on first show and keeps the filter bar pinned.
pub struct AudioPageController {
    repository: AlbumRepository<FetchAlbumSource>,
    grid: UseReducerDispatcher<AlbumGridState>,
    sticky: StickyFilters,
}

impl AudioPageController {
    #[must_use]
    pub fn new(source: FetchAlbumSource, grid: UseReducerDispatcher<AlbumGridState>) -> Self {
        Self {
            repository: AlbumRepository::new(source),
            grid,
            sticky: StickyFilters::default(),
        }
    }

    #[must_use]
    pub const fn repository(&self) -> &AlbumRepository<FetchAlbumSource> {
        &self.repository
    }
}

impl Showable for AudioPageController {
    async fn show(&self) {
        if let Some(albums) = self.repository.load().await {
            self.grid.dispatch(GridAction::Loaded(albums));
        }
        self.sticky.install();
    }
}

/// Music and software pages are authored markup; showing them is enough.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPageController;

impl Showable for StaticPageController {
    async fn show(&self) {}
}

pub struct PageRegistry {
    pub audio: AudioPageController,
    pub music: StaticPageController,
    pub software: StaticPageController,
}

impl PageRegistry {
    #[must_use]
    pub const fn new(audio: AudioPageController) -> Self {
        Self {
            audio,
            music: StaticPageController,
            software: StaticPageController,
        }
    }

    #[allow(clippy::future_not_send)]
    pub async fn show(&self, page: Page) {
        match page {
            Page::Home => {}
            Page::Audio => self.audio.show().await,
            Page::Music => self.music.show().await,
            Page::Software => self.software.show().await,
        }
    }
}
