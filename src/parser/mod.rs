//! The default [`FontProgramParser`].
//!
//! Only identity is extracted: names, weight and slope. Outlines, metrics
//! and glyph tables are left to the renderer's own font loading.
//!
//! ## Supported formats
//!
//! - TrueType, OpenType and TrueType collections (via `ttf-parser`)
//! - AFM, the text metrics of a Type 1 font
//! - PFM, the Windows binary metrics of a Type 1 font

mod afm;
mod pfm;
mod sfnt;

use petty_traits::{FontError, FontProgram, FontProgramParser, SharedFontData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sniffed {
    Sfnt,
    Afm,
    Pfm,
}

fn sniff(data: &[u8]) -> Option<Sniffed> {
    if sfnt::has_magic(data) {
        Some(Sniffed::Sfnt)
    } else if afm::has_magic(data) {
        Some(Sniffed::Afm)
    } else if pfm::has_magic(data) {
        Some(Sniffed::Pfm)
    } else {
        None
    }
}

/// Identity parser for sfnt, AFM and PFM fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontParser;

impl FontParser {
    pub fn new() -> Self {
        Self
    }
}

impl FontProgramParser for FontParser {
    fn parse(&self, data: SharedFontData) -> Result<FontProgram, FontError> {
        match sniff(&data) {
            Some(Sniffed::Sfnt) => sfnt::parse(data),
            Some(Sniffed::Afm) => afm::parse(data),
            Some(Sniffed::Pfm) => pfm::parse(data),
            None => Err(FontError::UnsupportedFormat(format!(
                "unrecognized header {:02x?}",
                &data[..data.len().min(4)]
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "FontParser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sniff_formats() {
        assert_eq!(sniff(&[0x00, 0x01, 0x00, 0x00, 0x00]), Some(Sniffed::Sfnt));
        assert_eq!(sniff(b"OTTO...."), Some(Sniffed::Sfnt));
        assert_eq!(sniff(b"ttcf...."), Some(Sniffed::Sfnt));
        assert_eq!(sniff(b"StartFontMetrics 4.1\n"), Some(Sniffed::Afm));
        assert_eq!(sniff(b"GIF89a"), None);
        assert_eq!(sniff(b""), None);
    }

    #[test]
    fn test_unknown_data_is_unsupported() {
        let result = FontParser::new().parse(Arc::new(b"not a font".to_vec()));
        assert!(matches!(result, Err(FontError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_empty_data_is_unsupported() {
        let result = FontParser::new().parse(Arc::new(Vec::new()));
        assert!(matches!(result, Err(FontError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_truncated_sfnt_is_invalid() {
        let result = FontParser::new().parse(Arc::new(vec![0x00, 0x01, 0x00, 0x00, 0x00, 0x04]));
        assert!(matches!(result, Err(FontError::InvalidData(_))));
    }
}
