//! Font family extraction (best effort).
//!
//! Parsing failures are never fatal: callers receive `None` and fall back to
//! the file name.

use std::path::Path;

use ttf_parser::{Face, name_id};

use crate::debug;

/// Name ids tried in order: typographic family first, legacy family second.
const FAMILY_IDS: [u16; 2] = [name_id::TYPOGRAPHIC_FAMILY, name_id::FAMILY];

/// Read a font file and extract its family name.
pub fn font_family(path: &Path) -> Option<String> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            debug!("font"; "cannot read {}: {}", path.display(), err);
            return None;
        }
    };

    let family = family_from_bytes(&data);
    if family.is_none() {
        debug!("font"; "no family name in {}, using file name", path.display());
    }
    family
}

/// Extract the family name from raw font data (first face of a collection).
pub fn family_from_bytes(data: &[u8]) -> Option<String> {
    let face = Face::parse(data, 0).ok()?;
    family_from_face(&face)
}

fn family_from_face(face: &Face<'_>) -> Option<String> {
    FAMILY_IDS.iter().find_map(|&id| {
        face.names()
            .into_iter()
            .filter(|name| name.name_id == id)
            .filter_map(|name| name.to_string())
            .map(|family| family.trim().to_string())
            .find(|family| !family.is_empty())
    })
}

/// Smallest TrueType file `ttf-parser` accepts, carrying `names` as
/// Windows Unicode records.
#[cfg(test)]
pub(crate) fn sample_font(names: &[(u16, &str)]) -> Vec<u8> {
    let mut head = vec![0u8; 54];
    head[18..20].copy_from_slice(&1000u16.to_be_bytes());
    let hhea = vec![0u8; 36];
    let mut maxp = 0x0000_5000u32.to_be_bytes().to_vec();
    maxp.extend_from_slice(&1u16.to_be_bytes());

    let mut records = Vec::new();
    let mut storage = Vec::new();
    for &(id, text) in names {
        let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        for field in [3, 1, 0x0409, id, encoded.len() as u16, storage.len() as u16] {
            records.extend_from_slice(&field.to_be_bytes());
        }
        storage.extend(encoded);
    }
    let mut name = Vec::new();
    for field in [0, names.len() as u16, 6 + records.len() as u16] {
        name.extend_from_slice(&field.to_be_bytes());
    }
    name.extend(records);
    name.extend(storage);

    // table records must be sorted by tag
    let tables: [(&[u8; 4], Vec<u8>); 4] =
        [(b"head", head), (b"hhea", hhea), (b"maxp", maxp), (b"name", name)];

    let mut font = 0x0001_0000u32.to_be_bytes().to_vec();
    font.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    font.extend_from_slice(&[0; 6]);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        font.extend_from_slice(&[0; 4]);
        font.extend_from_slice(&(offset as u32).to_be_bytes());
        font.extend_from_slice(&(data.len() as u32).to_be_bytes());
        offset += data.len();
        body.extend_from_slice(data);
    }
    font.extend(body);
    font
}
