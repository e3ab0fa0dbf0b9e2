use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{ColorError, Rgb};
use crate::page::Page;

/// Alpha applied to a page accent when tinting its back button.
pub const BACK_BUTTON_ALPHA: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("accent for {page}: {source}")]
    Accent {
        page: Page,
        #[source]
        source: ColorError,
    },
}

/// Background color of each content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAccents {
    pub audio: String,
    pub music: String,
    pub software: String,
}

impl Default for PageAccents {
    fn default() -> Self {
        Self {
            audio: String::from("#ff5733"),
            music: String::from("#33f039"),
            software: String::from("#5733ff"),
        }
    }
}

impl PageAccents {
    /// Accent for a page; `home` has none.
    #[must_use]
    pub fn for_page(&self, page: Page) -> Option<&str> {
        match page {
            Page::Home => None,
            Page::Audio => Some(&self.audio),
            Page::Music => Some(&self.music),
            Page::Software => Some(&self.software),
        }
    }
}

/// Transition durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    pub fade_out_ms: u32,
    pub cursor_reset_ms: u32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            fade_out_ms: 200,
            cursor_reset_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub albums_path: String,
    pub home_background: String,
    pub mobile_breakpoint_px: u32,
    pub accents: PageAccents,
    pub timing: TransitionTiming,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl SiteConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            albums_path: String::from("content/albums.json"),
            home_background: String::from("#121212"),
            mobile_breakpoint_px: 700,
            accents: PageAccents::default(),
            timing: TransitionTiming::default(),
        }
    }

    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an accent is not a hex color.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config, falling back to the defaults when it is unusable.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("using default site config: {err}");
            Self::default_config()
        })
    }

    /// Check every accent decomposes into RGB.
    ///
    /// # Errors
    ///
    /// Returns the first accent that fails to parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for page in Page::CONTENT {
            self.accent_rgb(page)
                .map_err(|source| ConfigError::Accent { page, source })?;
        }
        Ok(())
    }

    #[must_use]
    pub fn accent(&self, page: Page) -> Option<&str> {
        self.accents.for_page(page)
    }

    /// RGB channels of a page accent.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured accent is not a hex color.
    pub fn accent_rgb(&self, page: Page) -> Result<Option<Rgb>, ColorError> {
        self.accent(page).map(Rgb::from_hex).transpose()
    }

    /// Back button tint for a page: its accent at reduced opacity.
    #[must_use]
    pub fn back_button_tint(&self, page: Page) -> Option<String> {
        self.accent_rgb(page)
            .ok()
            .flatten()
            .map(|rgb| rgb.rgba(BACK_BUTTON_ALPHA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_site() {
        let config = SiteConfig::default_config();
        assert_eq!(config.accent(Page::Audio), Some("#ff5733"));
        assert_eq!(config.accent(Page::Home), None);
        assert_eq!(config.mobile_breakpoint_px, 700);
        assert_eq!(config.timing.fade_out_ms, 200);
        assert_eq!(config.timing.cursor_reset_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"mobile_breakpoint_px": 640}"#).expect("parse");
        assert_eq!(config.mobile_breakpoint_px, 640);
        assert_eq!(config.albums_path, "content/albums.json");
    }

    #[test]
    fn bad_accent_is_reported_and_defaults_used() {
        let json = r##"{"accents": {"audio": "#zzzzzz", "music": "#33f039", "software": "#5733ff"}}"##;
        assert!(matches!(
            SiteConfig::from_json(json),
            Err(ConfigError::Accent {
                page: Page::Audio,
                ..
            })
        ));
        assert_eq!(
            SiteConfig::from_json_or_default(json),
            SiteConfig::default_config()
        );
    }

    #[test]
    fn back_button_tint_uses_accent_channels() {
        let config = SiteConfig::default_config();
        assert_eq!(
            config.back_button_tint(Page::Audio).as_deref(),
            Some("rgba(255, 87, 51, 0.7)")
        );
        assert_eq!(config.back_button_tint(Page::Home), None);
    }
}
