use std::cell::RefCell;
use std::rc::Rc;

use crate::album::AlbumRecord;

/// Where the album list comes from. The web app fetches a static JSON file;
/// tests and the tester plug in their own.
#[allow(async_fn_in_trait)] // Sources run on a single-threaded executor.
pub trait AlbumSource {
    type Error: std::error::Error + 'static;

    /// Retrieve the full album list.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be retrieved or decoded.
    async fn fetch(&self) -> Result<Vec<AlbumRecord>, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Rc<[AlbumRecord]>),
}

/// Load-once holder for the album list.
///
/// A successful load is kept for the rest of the page's life. A failed load
/// is logged and leaves the repository empty; nothing retries on its own.
#[derive(Debug)]
pub struct AlbumRepository<S> {
    source: S,
    state: RefCell<LoadState>,
}

impl<S: AlbumSource> AlbumRepository<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            state: RefCell::new(LoadState::NotLoaded),
        }
    }

    /// Fetch the albums unless they are already loaded or being loaded.
    ///
    /// Returns the loaded collection, or `None` when nothing is available yet.
    #[allow(clippy::future_not_send)] // Shares state through `RefCell`.
    pub async fn load(&self) -> Option<Rc<[AlbumRecord]>> {
        match &*self.state.borrow() {
            LoadState::Loaded(albums) => return Some(Rc::clone(albums)),
            LoadState::Loading => return None,
            LoadState::NotLoaded => {}
        }

        self.state.replace(LoadState::Loading);
        match self.source.fetch().await {
            Ok(albums) => {
                let albums: Rc<[AlbumRecord]> = albums.into();
                log::info!("loaded {} albums", albums.len());
                self.state.replace(LoadState::Loaded(Rc::clone(&albums)));
                Some(albums)
            }
            Err(err) => {
                log::error!("Error loading albums: {err}");
                self.state.replace(LoadState::NotLoaded);
                None
            }
        }
    }

    #[must_use]
    pub fn albums(&self) -> Option<Rc<[AlbumRecord]>> {
        match &*self.state.borrow() {
            LoadState::Loaded(albums) => Some(Rc::clone(albums)),
            LoadState::NotLoaded | LoadState::Loading => None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Loaded(_))
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::AlbumCatalog;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::fmt;

    #[derive(Debug)]
    struct Unreachable;

    impl fmt::Display for Unreachable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("network unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    #[derive(Default)]
    struct CountingSource {
        fetches: Cell<u32>,
        fail: bool,
    }

    impl AlbumSource for CountingSource {
        type Error = Unreachable;

        async fn fetch(&self) -> Result<Vec<AlbumRecord>, Self::Error> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail {
                return Err(Unreachable);
            }
            let json = r#"[{"title":"X","artist":"A","year":2024,"type":["ep"],"role":["producer"],"img":"x.jpg","url":"https://x"}]"#;
            Ok(AlbumCatalog::from_json(json).map(|c| c.albums).unwrap_or_default())
        }
    }

    #[test]
    fn second_load_does_not_fetch_again() {
        let repo = AlbumRepository::new(CountingSource::default());
        let first = block_on(repo.load()).expect("first load");
        let second = block_on(repo.load()).expect("second load");
        assert_eq!(repo.source().fetches.get(), 1);
        assert!(Rc::ptr_eq(&first, &second));
        assert!(repo.is_loaded());
    }

    #[test]
    fn failed_load_leaves_repository_empty() {
        let repo = AlbumRepository::new(CountingSource {
            fail: true,
            ..CountingSource::default()
        });
        assert!(block_on(repo.load()).is_none());
        assert!(!repo.is_loaded());
        assert!(repo.albums().is_none());
    }

    #[test]
    fn failed_load_can_be_attempted_again_later() {
        let repo = AlbumRepository::new(CountingSource {
            fail: true,
            ..CountingSource::default()
        });
        let _ = block_on(repo.load());
        let _ = block_on(repo.load());
        assert_eq!(repo.source().fetches.get(), 2);
    }
}
