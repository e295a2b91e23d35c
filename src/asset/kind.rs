//! Asset kind definitions.

/// Kind of asset, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Any file that is not a recognised font.
    Generic,
    /// TrueType / OpenType font (family name is extracted).
    Font,
}

/// Default extensions classified as fonts.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

impl AssetKind {
    /// Classify a file name against a set of font extensions (case-insensitive).
    ///
    /// The extension is whatever follows the last `.`; a leading dot
    /// (`.ttf`) names a hidden file, not an extension.
    pub fn classify<S: AsRef<str>>(file_name: &str, font_extensions: &[S]) -> Self {
        let is_font = extension(file_name).is_some_and(|ext| {
            font_extensions
                .iter()
                .any(|font| font.as_ref().eq_ignore_ascii_case(ext))
        });
        if is_font { Self::Font } else { Self::Generic }
    }
}

fn extension(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(i) if i > 0 => Some(&file_name[i + 1..]),
        _ => None,
    }
}

/// File name without its extension (hidden files keep their leading dot).
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(i) if i > 0 => &file_name[..i],
        _ => file_name,
    }
}
