//! Printer Font Metrics.
//!
//! Only the fixed `PFMHEADER` fields and the two strings it points at are
//! read: the face name (`dfFace`) and the PostScript name stored at the
//! driver-info offset (`dfDriverInfo`).

use petty_style::{FontStyle, FontWeight};
use petty_traits::{FontError, FontFormat, FontNames, FontProgram, SharedFontData};

const VERSION: u16 = 0x0100;
const HEADER_LEN: usize = 147;

const DF_ITALIC: usize = 80;
const DF_WEIGHT: usize = 83;
const DF_FACE: usize = 105;
const DF_DRIVER_INFO: usize = 139;

fn u16_at(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn u32_at(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Reads the NUL-terminated Latin-1 string at the offset stored in `field`.
fn string_at(data: &[u8], field: usize) -> Option<String> {
    let start = usize::try_from(u32_at(data, field)?).ok()?;
    let tail = data.get(start..)?;
    let end = tail.iter().position(|&b| b == 0)?;
    let s: String = tail[..end].iter().map(|&b| char::from(b)).collect();
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

pub(super) fn has_magic(data: &[u8]) -> bool {
    data.len() >= HEADER_LEN && u16_at(data, 0) == Some(VERSION)
}

pub(super) fn parse(data: SharedFontData) -> Result<FontProgram, FontError> {
    if !has_magic(&data) {
        return Err(FontError::InvalidData("truncated PFM header".to_string()));
    }

    let italic = data[DF_ITALIC] != 0;
    let weight = u16_at(&data, DF_WEIGHT).unwrap_or(400);
    let face = string_at(&data, DF_FACE);
    let postscript = string_at(&data, DF_DRIVER_INFO);

    let font_name = postscript
        .or_else(|| face.as_ref().map(|f| f.replace(' ', "")))
        .ok_or(FontError::MissingName)?;

    let mut names = FontNames::new(font_name)
        .with_weight(FontWeight::from_numeric(weight))
        .with_style(if italic { FontStyle::Italic } else { FontStyle::Normal });
    names.family = face;
    Ok(FontProgram::new(names, FontFormat::Pfm, data))
}
