//! Selected-item styling: SGR constants, legacy [`Color`] codes and
//! [`SgrStyle`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::StyleError;

// ---------------------------------------------------------------------------
// SGR constants
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
pub const REVERSE: &str = "\x1b[7m";

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const BLACK_BG: &str = "\x1b[40m";
pub const RED_BG: &str = "\x1b[41m";
pub const GREEN_BG: &str = "\x1b[42m";
pub const YELLOW_BG: &str = "\x1b[43m";
pub const BLUE_BG: &str = "\x1b[44m";
pub const MAGENTA_BG: &str = "\x1b[45m";
pub const CYAN_BG: &str = "\x1b[46m";
pub const WHITE_BG: &str = "\x1b[47m";

/// Style of the highlighted row when nothing else is configured.
const DEFAULT_SELECTED: &str = "\x1b[34;1m";

static SINGLE_SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x1b\[[\d;]+m$").expect("SGR pattern is valid"));
static SGR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\x1b\[[\d;]+m)+$").expect("SGR pattern is valid"));

/// Whether `s` is exactly one `ESC [ <digits/;> m` sequence.
pub fn is_sgr(s: &str) -> bool {
    SINGLE_SGR.is_match(s)
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Legacy foreground colour codes accepted by
/// [`Menu::set_selected_color`](crate::Menu::set_selected_color).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl Color {
    /// The numeric SGR code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a colour by its numeric code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            30 => Some(Self::Black),
            31 => Some(Self::Red),
            32 => Some(Self::Green),
            33 => Some(Self::Yellow),
            34 => Some(Self::Blue),
            35 => Some(Self::Magenta),
            36 => Some(Self::Cyan),
            37 => Some(Self::White),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SgrStyle
// ---------------------------------------------------------------------------

/// A validated run of one or more SGR sequences applied to the selected row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SgrStyle(String);

impl SgrStyle {
    /// Parse a string made only of SGR sequences, e.g. `"\x1b[31m\x1b[47m"`.
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        if SGR_RUN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(StyleError::InvalidSgr(s.to_string()))
        }
    }

    /// Combine `sequences`, silently dropping the malformed ones.
    ///
    /// Falls back to plain blue when nothing valid remains.
    pub fn from_sequences<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut combined = String::new();
        for s in sequences {
            let s = s.as_ref();
            if is_sgr(s) {
                combined.push_str(s);
            } else {
                log::warn!("ignoring malformed selected style {s:?}");
            }
        }
        if combined.is_empty() {
            combined.push_str(BLUE);
        }
        Self(combined)
    }

    /// Bold foreground colour from a legacy numeric code (30..=37).
    pub fn from_color(code: u8) -> Result<Self, StyleError> {
        Color::from_code(code)
            .map(|c| Self(format!("\x1b[{};1m", c.code())))
            .ok_or(StyleError::ColorOutOfRange(code))
    }

    /// Like [`from_color`](Self::from_color) but falls back to bold blue.
    pub fn legacy_color(code: u8) -> Self {
        Self::from_color(code).unwrap_or_else(|e| {
            log::warn!("{e}, using blue");
            Self::default()
        })
    }

    /// The raw escape text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SgrStyle {
    fn default() -> Self {
        Self(DEFAULT_SELECTED.to_string())
    }
}

impl fmt::Display for SgrStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SgrStyle {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SgrStyle> for String {
    fn from(style: SgrStyle) -> Self {
        style.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sequence_check() {
        assert!(is_sgr(RED));
        assert!(is_sgr("\x1b[38;5;208m"));
        assert!(!is_sgr("\x1b[31mred"));
        assert!(!is_sgr("\x1b[2A"));
        assert!(!is_sgr(""));
    }

    #[test]
    fn from_sequences_drops_invalid_entries() {
        let s = SgrStyle::from_sequences([RED, "bogus", WHITE_BG]);
        assert_eq!(s.as_str(), "\x1b[31m\x1b[47m");
    }

    #[test]
    fn from_sequences_falls_back_to_blue() {
        let s = SgrStyle::from_sequences(["nope", "\x1b[K"]);
        assert_eq!(s.as_str(), BLUE);
        let s = SgrStyle::from_sequences(Vec::<String>::new());
        assert_eq!(s.as_str(), BLUE);
    }

    #[test]
    fn legacy_color_codes() {
        assert_eq!(SgrStyle::legacy_color(31).as_str(), "\x1b[31;1m");
        assert_eq!(SgrStyle::legacy_color(37).as_str(), "\x1b[37;1m");
        assert_eq!(SgrStyle::legacy_color(29), SgrStyle::default());
        assert_eq!(SgrStyle::legacy_color(38), SgrStyle::default());
        assert_eq!(
            SgrStyle::from_color(90),
            Err(StyleError::ColorOutOfRange(90))
        );
    }

    #[test]
    fn parse_accepts_runs_only() {
        assert!(SgrStyle::parse("\x1b[1m\x1b[4m").is_ok());
        assert!(SgrStyle::parse("\x1b[1mX").is_err());
        assert_eq!(Color::from_code(Color::Cyan.code()), Some(Color::Cyan));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_on_load() {
        let ok: SgrStyle = serde_json::from_str("\"\\u001b[35m\"").unwrap();
        assert_eq!(ok.as_str(), MAGENTA);
        assert!(serde_json::from_str::<SgrStyle>("\"magenta\"").is_err());
    }
}
