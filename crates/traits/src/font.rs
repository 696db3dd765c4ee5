//! Font program types and the parser seam.
//!
//! A `FontProgram` is whatever a parser could learn about a font resource:
//! its names, weight and slope, and the bytes it was read from. The registry
//! never looks inside the bytes itself; it only asks a `FontProgramParser`.

use petty_style::{FontStyle, FontWeight};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for font parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Unsupported font format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Font does not declare a usable name")]
    MissingName,
}

/// Shared font data type (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// The container format a font program was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    TrueType,
    OpenType,
    TrueTypeCollection,
    /// Adobe Font Metrics, the text metrics file of a Type 1 font.
    Afm,
    /// Printer Font Metrics, the Windows binary metrics file of a Type 1 font.
    Pfm,
}

/// Naming and classification data extracted from a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNames {
    /// The PostScript name, used as the font's own identity.
    pub font_name: String,
    pub full_name: Option<String>,
    pub family: Option<String>,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontNames {
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            full_name: None,
            family: None,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns true if `family` names this font, by family, full name or
    /// PostScript name, ignoring case.
    ///
    /// Case is folded with Unicode lowercasing on both sides, the same rule
    /// selection queries normalize their families with.
    pub fn matches_family(&self, family: &str) -> bool {
        let family = family.to_lowercase();
        self.family
            .iter()
            .chain(self.full_name.iter())
            .chain(std::iter::once(&self.font_name))
            .any(|name| name.to_lowercase() == family)
    }
}

/// A parsed font resource.
#[derive(Clone)]
pub struct FontProgram {
    pub names: FontNames,
    pub format: FontFormat,
    pub data: SharedFontData,
}

impl Debug for FontProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontProgram")
            .field("names", &self.names)
            .field("format", &self.format)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontProgram {
    pub fn new(names: FontNames, format: FontFormat, data: SharedFontData) -> Self {
        Self {
            names,
            format,
            data,
        }
    }

    /// The name this program identifies itself by.
    pub fn font_name(&self) -> &str {
        &self.names.font_name
    }
}

/// A trait for turning raw font bytes into a `FontProgram`.
///
/// Implementations decide which formats they understand. Any error means
/// "this resource is not a usable font"; callers are expected to skip it.
///
/// # Example
///
/// ```ignore
/// let parser: Arc<dyn FontProgramParser> = Arc::new(FontParser::new());
/// let program = parser.parse(Arc::new(std::fs::read("DejaVuSans.ttf")?))?;
/// println!("{}", program.font_name());
/// ```
pub trait FontProgramParser: Send + Sync + Debug {
    /// Parse a font resource from its bytes.
    fn parse(&self, data: SharedFontData) -> Result<FontProgram, FontError>;

    /// Returns a human-readable name for this parser (for logging/debugging).
    fn name(&self) -> &'static str;
}
