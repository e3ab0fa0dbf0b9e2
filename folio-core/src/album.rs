use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Releases from this year onward are tagged as recent.
pub const RECENT_SINCE_YEAR: i32 = 2024;

/// Tag values that mark a record's release format, in classification priority order.
pub const FORMAT_PRIORITY: [AlbumFormat; 3] =
    [AlbumFormat::Album, AlbumFormat::Ep, AlbumFormat::Single];

const FEATURED_TAG: &str = "featured";

/// One entry of the album dataset, exactly as it appears in `albums.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub role: SmallVec<[String; 2]>,
    #[serde(rename = "type", default)]
    pub kinds: SmallVec<[String; 2]>,
    pub img: String,
    pub url: String,
}

impl AlbumRecord {
    #[must_use]
    pub fn has_kind(&self, kind: &str) -> bool {
        self.kinds.iter().any(|k| k == kind)
    }

    /// Roles joined for display on a grid card.
    #[must_use]
    pub fn role_line(&self) -> String {
        self.role.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumFormat {
    #[default]
    Album,
    Ep,
    Single,
}

impl AlbumFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Ep => "ep",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for AlbumFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification used by the grid filters. Never cached; cheap to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTags {
    pub format: AlbumFormat,
    pub featured: bool,
    pub recent: bool,
}

/// Derive filter tags for a record.
///
/// The format is the first of `album`, `ep`, `single` (in that order) present
/// in the record's `type` set, defaulting to `album`.
#[must_use]
pub fn classify(record: &AlbumRecord) -> DerivedTags {
    let format = FORMAT_PRIORITY
        .into_iter()
        .find(|format| record.has_kind(format.as_str()))
        .unwrap_or_default();

    DerivedTags {
        format,
        featured: record.has_kind(FEATURED_TAG),
        recent: record.year >= RECENT_SINCE_YEAR,
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("album catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems a catalog can carry that only show up once a card is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    EmptyRole { index: usize, title: String },
    YearOutOfRange { index: usize, title: String, year: i32 },
    MissingUrl { index: usize, title: String },
    MissingImage { index: usize, title: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRole { index, title } => write!(f, "#{index} '{title}': role list is empty"),
            Self::YearOutOfRange { index, title, year } => {
                write!(f, "#{index} '{title}': year {year} is not a 4-digit year")
            }
            Self::MissingUrl { index, title } => write!(f, "#{index} '{title}': url is empty"),
            Self::MissingImage { index, title } => write!(f, "#{index} '{title}': img is empty"),
        }
    }
}

/// The full album list in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumCatalog {
    pub albums: Vec<AlbumRecord>,
}

impl AlbumCatalog {
    /// Parse a catalog from the JSON array served as `albums.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of album records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn from_albums(albums: Vec<AlbumRecord>) -> Self {
        Self { albums }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Collect every record that would render badly.
    #[must_use]
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (index, album) in self.albums.iter().enumerate() {
            let title = album.title.clone();
            if album.role.is_empty() {
                issues.push(CatalogIssue::EmptyRole {
                    index,
                    title: title.clone(),
                });
            }
            if !(1000..=9999).contains(&album.year) {
                issues.push(CatalogIssue::YearOutOfRange {
                    index,
                    title: title.clone(),
                    year: album.year,
                });
            }
            if album.url.trim().is_empty() {
                issues.push(CatalogIssue::MissingUrl {
                    index,
                    title: title.clone(),
                });
            }
            if album.img.trim().is_empty() {
                issues.push(CatalogIssue::MissingImage { index, title });
            }
        }
        issues
    }
}
