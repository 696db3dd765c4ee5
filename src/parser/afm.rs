use petty_style::{FontStyle, FontWeight};
use petty_traits::{FontError, FontFormat, FontNames, FontProgram, SharedFontData};

const HEADER: &[u8] = b"StartFontMetrics";

pub(super) fn has_magic(data: &[u8]) -> bool {
    data.strip_prefix(b"\xEF\xBB\xBF".as_slice())
        .unwrap_or(data)
        .trim_ascii_start()
        .starts_with(HEADER)
}

/// Reads the global section of an AFM file, up to the character metrics.
pub(super) fn parse(data: SharedFontData) -> Result<FontProgram, FontError> {
    let text = String::from_utf8_lossy(&data);
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    match lines.next() {
        Some(first) if first.starts_with("StartFontMetrics") => {}
        _ => return Err(FontError::InvalidData("missing StartFontMetrics".to_string())),
    }

    let mut font_name = None;
    let mut full_name = None;
    let mut family = None;
    let mut weight = FontWeight::Regular;
    let mut style = FontStyle::Normal;

    for line in lines {
        let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let value = value.trim();
        match key {
            "FontName" if !value.is_empty() => font_name = Some(value.to_string()),
            "FullName" if !value.is_empty() => full_name = Some(value.to_string()),
            "FamilyName" if !value.is_empty() => family = Some(value.to_string()),
            "Weight" => {
                weight = value.parse().unwrap_or_else(|_| {
                    log::debug!("Unknown AFM weight '{}', assuming regular", value);
                    FontWeight::Regular
                })
            }
            "ItalicAngle" => {
                let angle: f32 = value
                    .parse()
                    .map_err(|_| FontError::InvalidData(format!("bad ItalicAngle '{}'", value)))?;
                if angle != 0.0 {
                    style = FontStyle::Italic;
                }
            }
            "StartCharMetrics" | "EndFontMetrics" => break,
            _ => {}
        }
    }

    let mut names = FontNames::new(font_name.ok_or(FontError::MissingName)?)
        .with_weight(weight)
        .with_style(style);
    names.full_name = full_name;
    names.family = family;
    Ok(FontProgram::new(names, FontFormat::Afm, data))
}
