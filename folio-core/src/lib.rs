//! Folio core
//!
//! Platform-agnostic logic for the portfolio site: the album catalog and its
//! filters, the page routing codec, the page transition state machine and
//! site configuration. Nothing here touches the DOM.

pub mod album;
pub mod color;
pub mod config;
pub mod filter;
pub mod layout;
pub mod page;
pub mod repository;
pub mod transition;

pub use album::{
    AlbumCatalog, AlbumFormat, AlbumRecord, CatalogError, CatalogIssue, DerivedTags,
    RECENT_SINCE_YEAR, classify,
};
pub use color::{ColorError, Rgb};
pub use config::{ConfigError, PageAccents, SiteConfig, TransitionTiming};
pub use filter::{AlbumFilter, FilterState, filter_albums};
pub use layout::{Overflow, body_overflow, filter_bar_stuck};
pub use page::{Page, decode_fragment, encode_fragment, history_push_for, location_hash};
pub use repository::{AlbumRepository, AlbumSource, LoadState};
pub use transition::{
    InlineStyle, Reveal, Ticket, TransitionPhase, TransitionStep, Transitioner,
};
