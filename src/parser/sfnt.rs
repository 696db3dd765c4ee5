use petty_style::{FontStyle, FontWeight};
use petty_traits::{FontError, FontFormat, FontNames, FontProgram, SharedFontData};
use ttf_parser::{name_id, Face};

const TRUETYPE: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

pub(super) fn has_magic(data: &[u8]) -> bool {
    matches!(data.get(..4), Some(m) if m == TRUETYPE || m == b"true" || m == b"OTTO" || m == b"ttcf")
}

fn format_of(data: &[u8]) -> FontFormat {
    match data.get(..4) {
        Some(b"OTTO") => FontFormat::OpenType,
        Some(b"ttcf") => FontFormat::TrueTypeCollection,
        _ => FontFormat::TrueType,
    }
}

pub(super) fn parse(data: SharedFontData) -> Result<FontProgram, FontError> {
    let format = format_of(&data);
    if format == FontFormat::TrueTypeCollection {
        match ttf_parser::fonts_in_collection(&data) {
            Some(n) if n > 0 => log::debug!("Font collection with {} faces, describing it by the first", n),
            _ => return Err(FontError::InvalidData("empty font collection".to_string())),
        }
    }

    let names = {
        let face = Face::parse(&data, 0).map_err(|e| FontError::InvalidData(e.to_string()))?;
        extract_names(&face)?
    };

    Ok(FontProgram::new(names, format, data))
}

fn find_name(face: &Face<'_>, id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|n| n.name_id == id)
        .find_map(|n| n.to_string())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_names(face: &Face<'_>) -> Result<FontNames, FontError> {
    let full_name = find_name(face, name_id::FULL_NAME);
    let family = find_name(face, name_id::TYPOGRAPHIC_FAMILY).or_else(|| find_name(face, name_id::FAMILY));

    // PostScript names never contain spaces; fall back to the full name, then
    // the family, squeezed the same way.
    let font_name = find_name(face, name_id::POST_SCRIPT_NAME)
        .or_else(|| full_name.clone())
        .or_else(|| family.clone())
        .map(|name| name.replace(' ', ""))
        .ok_or(FontError::MissingName)?;

    let style = match face.style() {
        ttf_parser::Style::Normal => FontStyle::Normal,
        ttf_parser::Style::Italic => FontStyle::Italic,
        ttf_parser::Style::Oblique => FontStyle::Oblique,
    };

    let mut names = FontNames::new(font_name)
        .with_weight(FontWeight::from_numeric(face.weight().to_number()))
        .with_style(style);
    names.full_name = full_name;
    names.family = family;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_magic() {
        assert!(has_magic(&TRUETYPE));
        assert!(has_magic(b"true"));
        assert!(has_magic(b"OTTO"));
        assert!(has_magic(b"ttcf"));
        assert!(!has_magic(b"OTT"));
        assert!(!has_magic(b"wOFF"));
    }

    #[test]
    fn test_format_of() {
        assert_eq!(format_of(b"OTTO"), FontFormat::OpenType);
        assert_eq!(format_of(b"ttcf"), FontFormat::TrueTypeCollection);
        assert_eq!(format_of(&TRUETYPE), FontFormat::TrueType);
    }

    #[test]
    fn test_empty_collection_is_invalid() {
        let mut data = b"ttcf".to_vec();
        data.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let result = parse(std::sync::Arc::new(data));
        assert!(matches!(result, Err(FontError::InvalidData(_))));
    }
}
