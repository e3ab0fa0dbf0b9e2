use std::rc::Rc;
use std::str::FromStr;

use crate::album::{AlbumFormat, AlbumRecord, DerivedTags, classify};

/// Grid filters, in the order their buttons are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlbumFilter {
    #[default]
    All,
    Albums,
    Eps,
    Singles,
    Featured,
    Recent,
}

impl AlbumFilter {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Albums,
        Self::Eps,
        Self::Singles,
        Self::Featured,
        Self::Recent,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Albums => "albums",
            Self::Eps => "eps",
            Self::Singles => "singles",
            Self::Featured => "featured",
            Self::Recent => "recent",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Albums => "Albums",
            Self::Eps => "EPs",
            Self::Singles => "Singles",
            Self::Featured => "Featured",
            Self::Recent => "Recent",
        }
    }

    /// Resolve a filter by name. Unknown names fall back to [`AlbumFilter::All`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|()| {
            log::debug!("unknown album filter '{name}', showing all");
            Self::All
        })
    }

    #[must_use]
    pub fn matches(self, tags: DerivedTags) -> bool {
        match self {
            Self::All => true,
            Self::Albums => tags.format == AlbumFormat::Album,
            Self::Eps => tags.format == AlbumFormat::Ep,
            Self::Singles => tags.format == AlbumFormat::Single,
            Self::Featured => tags.featured,
            Self::Recent => tags.recent,
        }
    }
}

impl FromStr for AlbumFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name() == s)
            .ok_or(())
    }
}

/// Stable filter: the result keeps the catalog's relative order.
#[must_use]
pub fn filter_albums(albums: &[AlbumRecord], filter: AlbumFilter) -> Vec<AlbumRecord> {
    albums
        .iter()
        .filter(|album| filter.matches(classify(album)))
        .cloned()
        .collect()
}

/// The active filter and what it currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub filter: AlbumFilter,
    pub visible: Rc<[AlbumRecord]>,
}

impl FilterState {
    /// Initial state after a catalog load: everything visible.
    #[must_use]
    pub fn showing_all(albums: &Rc<[AlbumRecord]>) -> Self {
        Self {
            filter: AlbumFilter::All,
            visible: Rc::clone(albums),
        }
    }

    /// Recompute the visible subset from the full catalog.
    pub fn apply(&mut self, albums: &[AlbumRecord], filter: AlbumFilter) {
        self.filter = filter;
        self.visible = filter_albums(albums, filter).into();
    }

    #[must_use]
    pub fn is_active(&self, filter: AlbumFilter) -> bool {
        self.filter == filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::AlbumCatalog;

    const SAMPLE: &str = r#"[
        {"title":"X","artist":"A","year":2024,"type":["ep"],"role":["producer"],"img":"x.jpg","url":"https://x"},
        {"title":"Y","artist":"B","year":2020,"type":["album","featured"],"role":["mixer"],"img":"y.jpg","url":"https://y"}
    ]"#;

    fn titles(albums: &[AlbumRecord]) -> Vec<&str> {
        albums.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn filters_select_expected_titles() {
        let catalog = AlbumCatalog::from_json(SAMPLE).expect("sample parses");
        let albums = &catalog.albums;
        assert_eq!(titles(&filter_albums(albums, AlbumFilter::Eps)), ["X"]);
        assert_eq!(titles(&filter_albums(albums, AlbumFilter::Featured)), ["Y"]);
        assert_eq!(titles(&filter_albums(albums, AlbumFilter::Recent)), ["X"]);
        assert_eq!(titles(&filter_albums(albums, AlbumFilter::Albums)), ["Y"]);
        assert!(filter_albums(albums, AlbumFilter::Singles).is_empty());
        assert_eq!(titles(&filter_albums(albums, AlbumFilter::All)), ["X", "Y"]);
    }

    #[test]
    fn names_round_trip_and_unknown_defaults_to_all() {
        for filter in AlbumFilter::ALL {
            assert_eq!(AlbumFilter::from_name(filter.name()), filter);
        }
        assert_eq!(AlbumFilter::from_name("bogus"), AlbumFilter::All);
        assert_eq!(AlbumFilter::from_name("EPS"), AlbumFilter::All);
        assert_eq!(AlbumFilter::from_name(""), AlbumFilter::All);
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let catalog = AlbumCatalog::from_json(SAMPLE).expect("sample parses");
        for filter in AlbumFilter::ALL {
            let mut state = FilterState::default();
            state.apply(&catalog.albums, filter);
            let first = state.clone();
            state.apply(&catalog.albums, filter);
            assert_eq!(state, first, "{} should be idempotent", filter.name());
        }
    }

    #[test]
    fn only_the_applied_filter_is_active() {
        let catalog = AlbumCatalog::from_json(SAMPLE).expect("sample parses");
        let albums: Rc<[AlbumRecord]> = catalog.albums.into();
        let mut state = FilterState::showing_all(&albums);
        assert!(state.is_active(AlbumFilter::All));
        state.apply(&albums, AlbumFilter::Recent);
        let active: Vec<_> = AlbumFilter::ALL
            .into_iter()
            .filter(|f| state.is_active(*f))
            .collect();
        assert_eq!(active, [AlbumFilter::Recent]);
    }
}
