use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing font style values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("Invalid font weight: '{0}'")]
    InvalidWeight(String),

    #[error("Invalid font style: '{0}'")]
    InvalidStyle(String),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    ///
    /// Standard CSS font-weight values:
    /// - Thin: 100
    /// - Light: 300
    /// - Regular: 400
    /// - Medium: 500
    /// - Bold: 700
    /// - Black: 900
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    /// Maps a numeric weight onto the named variant when one exists.
    ///
    /// Font files report weights as plain numbers; normalizing them here keeps
    /// `FontWeight::Numeric(700)` and `FontWeight::Bold` from comparing unequal.
    pub fn from_numeric(value: u16) -> Self {
        match value {
            100 => FontWeight::Thin,
            300 => FontWeight::Light,
            400 => FontWeight::Regular,
            500 => FontWeight::Medium,
            700 => FontWeight::Bold,
            900 => FontWeight::Black,
            n => FontWeight::Numeric(n),
        }
    }

    /// Absolute distance between two weights on the numeric scale.
    pub fn distance(&self, other: &FontWeight) -> u16 {
        self.numeric_value().abs_diff(other.numeric_value())
    }

    pub fn is_bold(&self) -> bool {
        self.numeric_value() >= 600
    }

    /// Parses the weight names used by AFM files and stylesheets
    /// ("Bold", "semibold", "400", ...).
    fn parse(s: &str) -> Result<Self, StyleParseError> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "thin" | "hairline" => Ok(FontWeight::Thin),
            "extralight" | "ultralight" => Ok(FontWeight::Numeric(200)),
            "light" => Ok(FontWeight::Light),
            "regular" | "normal" | "roman" | "book" => Ok(FontWeight::Regular),
            "medium" => Ok(FontWeight::Medium),
            "semibold" | "demibold" | "demi" => Ok(FontWeight::Numeric(600)),
            "bold" => Ok(FontWeight::Bold),
            "extrabold" | "ultrabold" | "heavy" => Ok(FontWeight::Numeric(800)),
            "black" => Ok(FontWeight::Black),
            _ => lower
                .parse::<u16>()
                .map(FontWeight::from_numeric)
                .map_err(|_| StyleParseError::InvalidWeight(s.to_string())),
        }
    }
}

impl FromStr for FontWeight {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeric_value())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(FontWeight::from_numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    /// Italic and oblique faces both satisfy a request for a slanted face.
    pub fn is_slanted(&self) -> bool {
        !matches!(self, FontStyle::Normal)
    }
}

impl FromStr for FontStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "regular" | "upright" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            "oblique" => Ok(FontStyle::Oblique),
            _ => Err(StyleParseError::InvalidStyle(s.to_string())),
        }
    }
}
