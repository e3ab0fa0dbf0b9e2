//! Logical pages and the URL-fragment codec used for client-side routing.
//!
//! `home` lives at the bare path; every other page is addressed by its
//! capitalized name (`#Audio`). Decoding is case-insensitive and anything it
//! does not recognize resolves to `home`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Audio,
    Music,
    Software,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Audio, Self::Music, Self::Software];

    /// Content pages in their left-to-right navigation order.
    pub const CONTENT: [Self; 3] = [Self::Audio, Self::Music, Self::Software];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Audio => "audio",
            Self::Music => "music",
            Self::Software => "software",
        }
    }

    /// Display title, also the fragment spelling.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Audio => "Audio",
            Self::Music => "Music",
            Self::Software => "Software",
        }
    }

    /// DOM id of the page's container.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Home => "homepage",
            Self::Audio => "audio-page",
            Self::Music => "music-page",
            Self::Software => "software-page",
        }
    }

    #[must_use]
    pub const fn is_content(self) -> bool {
        !matches!(self, Self::Home)
    }

    /// Content page to the left of this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Music => Some(Self::Audio),
            Self::Software => Some(Self::Music),
            Self::Home | Self::Audio => None,
        }
    }

    /// Content page to the right of this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Audio => Some(Self::Music),
            Self::Music => Some(Self::Software),
            Self::Home | Self::Software => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a URL fragment (with or without the leading `#`) to a page.
#[must_use]
pub fn decode_fragment(fragment: &str) -> Page {
    let name = fragment.strip_prefix('#').unwrap_or(fragment).to_lowercase();
    Page::CONTENT
        .into_iter()
        .find(|page| page.name() == name)
        .unwrap_or(Page::Home)
}

/// Fragment for a page, without the `#`. `home` encodes to the empty string.
#[must_use]
pub fn encode_fragment(page: Page) -> &'static str {
    match page {
        Page::Home => "",
        other => other.title(),
    }
}

/// The `location.hash` value a page is shown under (`""` or `#Audio`).
#[must_use]
pub fn location_hash(page: Page) -> String {
    match encode_fragment(page) {
        "" => String::new(),
        fragment => format!("#{fragment}"),
    }
}

/// What a navigation should push onto the history stack, if anything.
///
/// Returns `None` when `current_hash` already addresses `page`, so redundant
/// navigations never add duplicate entries.
#[must_use]
pub fn history_push_for(page: Page, current_hash: &str) -> Option<String> {
    let target = location_hash(page);
    (target != current_hash).then_some(target)
}
