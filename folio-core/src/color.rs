use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static HEX_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("'{0}' is not a six-digit hex color")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decompose `#rrggbb` (leading `#` optional, any case) into channels.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for anything other than six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let caps = HEX_COLOR
            .as_ref()
            .and_then(|re| re.captures(hex))
            .ok_or_else(invalid)?;
        let channel = |idx: usize| {
            caps.get(idx)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
                .ok_or_else(invalid)
        };
        Ok(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }

    /// CSS `rgba()` with the given alpha.
    #[must_use]
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accent_colors() {
        assert_eq!(
            Rgb::from_hex("#ff5733"),
            Ok(Rgb {
                r: 255,
                g: 87,
                b: 51
            })
        );
        assert_eq!(Rgb::from_hex("33F039").map(|c| c.g), Ok(240));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "#ff57331", "#gg5733", "ff 573"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn formats_translucent_back_button_tint() {
        let rgb = Rgb::from_hex("#5733ff").expect("valid hex");
        assert_eq!(rgb.rgba(0.7), "rgba(87, 51, 255, 0.7)");
        assert_eq!(rgb.to_string(), "#5733ff");
    }
}
