//! Minimal font files for tests.
//!
//! The sfnt fonts carry just the tables `ttf-parser` needs to accept a face
//! (`head`, `hhea`, `maxp`) plus `OS/2` and `name` for identity. They have no
//! glyph outlines.

pub const TRUETYPE: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
pub const OPENTYPE: [u8; 4] = *b"OTTO";

const FS_SELECTION_ITALIC: u16 = 0x0001;
const FS_SELECTION_REGULAR: u16 = 0x0040;

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn head() -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0x0001_0000); // fontRevision
    push_u32(&mut t, 0); // checkSumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // unitsPerEm
    t.extend_from_slice(&[0u8; 16]); // created, modified
    t.extend_from_slice(&[0u8; 8]); // bounding box
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_u16(&mut t, 2); // fontDirectionHint
    push_u16(&mut t, 0); // indexToLocFormat
    push_u16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea() -> Vec<u8> {
    let mut t = Vec::with_capacity(36);
    push_u32(&mut t, 0x0001_0000); // version
    push_u16(&mut t, 800); // ascender
    push_u16(&mut t, (-200i16) as u16); // descender
    t.extend_from_slice(&[0u8; 26]); // lineGap .. metricDataFormat
    push_u16(&mut t, 0); // numberOfHMetrics
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    push_u32(&mut t, 0x0000_5000); // version 0.5
    push_u16(&mut t, 1); // numGlyphs
    t
}

fn os2(weight: u16, italic: bool) -> Vec<u8> {
    let mut t = vec![0u8; 96];
    t[0..2].copy_from_slice(&4u16.to_be_bytes()); // version
    t[4..6].copy_from_slice(&weight.to_be_bytes()); // usWeightClass
    t[6..8].copy_from_slice(&5u16.to_be_bytes()); // usWidthClass
    let selection = if italic {
        FS_SELECTION_ITALIC
    } else {
        FS_SELECTION_REGULAR
    };
    t[62..64].copy_from_slice(&selection.to_be_bytes()); // fsSelection
    t
}

/// A `name` table with Windows Unicode BMP records.
fn name_table(records: &[(u16, &str)]) -> Vec<u8> {
    let mut storage = Vec::new();
    let mut t = Vec::new();
    push_u16(&mut t, 0); // format
    push_u16(&mut t, records.len() as u16);
    push_u16(&mut t, (6 + 12 * records.len()) as u16); // storage offset

    for (name_id, value) in records {
        let encoded: Vec<u8> = value.encode_utf16().flat_map(u16::to_be_bytes).collect();
        push_u16(&mut t, 3); // platform: Windows
        push_u16(&mut t, 1); // encoding: Unicode BMP
        push_u16(&mut t, 0x0409); // language: en-US
        push_u16(&mut t, *name_id);
        push_u16(&mut t, encoded.len() as u16);
        push_u16(&mut t, storage.len() as u16);
        storage.extend_from_slice(&encoded);
    }
    t.extend_from_slice(&storage);
    t
}

/// Builds an sfnt whose table offsets account for `base`, the position of
/// the offset table within the final file.
fn sfnt_at(
    base: usize,
    magic: [u8; 4],
    family: &str,
    postscript: &str,
    weight: u16,
    italic: bool,
) -> Vec<u8> {
    let full_name = postscript.replace('-', " ");
    let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
        (*b"OS/2", os2(weight, italic)),
        (*b"head", head()),
        (*b"hhea", hhea()),
        (*b"maxp", maxp()),
        (
            *b"name",
            name_table(&[(1, family), (4, &full_name), (6, postscript)]),
        ),
    ];
    tables.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = Vec::new();
    out.extend_from_slice(&magic);
    push_u16(&mut out, tables.len() as u16);
    out.extend_from_slice(&[0u8; 6]); // searchRange, entrySelector, rangeShift

    let data_start = base + 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        out.extend_from_slice(tag);
        push_u32(&mut out, 0); // checksum
        push_u32(&mut out, (data_start + body.len()) as u32);
        push_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
    }
    out.extend_from_slice(&body);
    out
}

pub fn sfnt(magic: [u8; 4], family: &str, postscript: &str, weight: u16, italic: bool) -> Vec<u8> {
    sfnt_at(0, magic, family, postscript, weight, italic)
}

pub fn ttf(family: &str, postscript: &str) -> Vec<u8> {
    sfnt(TRUETYPE, family, postscript, 400, false)
}

pub fn otf(family: &str, postscript: &str) -> Vec<u8> {
    sfnt(OPENTYPE, family, postscript, 400, false)
}

/// A TrueType collection holding a single face.
pub fn ttc(family: &str, postscript: &str) -> Vec<u8> {
    const HEADER_LEN: usize = 16;
    let mut out = b"ttcf".to_vec();
    push_u32(&mut out, 0x0001_0000); // version
    push_u32(&mut out, 1); // numFonts
    push_u32(&mut out, HEADER_LEN as u32); // offset of the first face
    out.extend_from_slice(&sfnt_at(
        HEADER_LEN, TRUETYPE, family, postscript, 400, false,
    ));
    out
}

pub fn afm(font_name: &str, family: &str) -> Vec<u8> {
    format!(
        "StartFontMetrics 4.1\n\
         FontName {font_name}\n\
         FullName {family} Medium\n\
         FamilyName {family}\n\
         Weight Medium\n\
         ItalicAngle 0\n\
         StartCharMetrics 0\n\
         EndCharMetrics\n\
         EndFontMetrics\n"
    )
    .into_bytes()
}

/// A Printer Font Metrics file: the fixed header followed by the face name
/// and the PostScript name it points at.
pub fn pfm(face: &str, postscript: &str) -> Vec<u8> {
    const HEADER_LEN: usize = 147;
    let mut data = vec![0u8; HEADER_LEN];
    data[0..2].copy_from_slice(&0x0100u16.to_le_bytes()); // dfVersion
    data[83..85].copy_from_slice(&400u16.to_le_bytes()); // dfWeight

    let face_offset = data.len() as u32;
    data[105..109].copy_from_slice(&face_offset.to_le_bytes()); // dfFace
    data.extend_from_slice(face.as_bytes());
    data.push(0);

    let postscript_offset = data.len() as u32;
    data[139..143].copy_from_slice(&postscript_offset.to_le_bytes()); // dfDriverInfo
    data.extend_from_slice(postscript.as_bytes());
    data.push(0);

    // dfSize; also keeps the header from reading as a TrueType magic.
    let size = data.len() as u32;
    data[2..6].copy_from_slice(&size.to_le_bytes());
    data
}

/// Stand-in for a Type 1 outline file; only its presence matters.
pub fn pfb() -> Vec<u8> {
    vec![0x80, 0x01, 0x00, 0x00, 0x00, 0x00]
}

/// Has the TrueType magic but nothing behind it.
pub fn corrupt() -> Vec<u8> {
    let mut data = TRUETYPE.to_vec();
    data.extend_from_slice(&[0xFF; 8]);
    data
}
