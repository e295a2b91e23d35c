//! Identifier sanitization and per-namespace collision resolution.
//!
//! Output is restricted to ASCII `[A-Za-z0-9_]` so the generated source is
//! identical on every host, whatever its locale.

use rustc_hash::FxHashSet;

use crate::error::{GenerateError, Result};

/// Default number of `_N` suffixes tried before giving up.
pub const DEFAULT_MAX_SUFFIX_ATTEMPTS: usize = 1000;

/// Rust keywords (strict and reserved) that cannot name a module.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Map a file name to an upper-case constant identifier.
///
/// ```text
/// "my file-1.png" -> "MY_FILE_1_PNG"
/// "1up.wav"       -> "_1UP_WAV"
/// "-"             -> "__"
/// ```
pub fn sanitize(name: &str) -> String {
    let mut ident = replace_invalid(name);
    ident.make_ascii_uppercase();
    ident
}

/// Constant identifier for a file: its name without the extension, sanitized.
///
/// ```text
/// "Roboto-Bold.ttf" -> "ROBOTO_BOLD"
/// ".gitkeep"        -> "_GITKEEP"
/// ```
pub fn constant_name(file_name: &str) -> String {
    sanitize(super::kind::file_stem(file_name))
}

/// Map a directory name to a lower-case module identifier.
///
/// Keywords get a trailing underscore (`type` -> `type_`).
pub fn module_name(name: &str) -> String {
    let mut ident = replace_invalid(name);
    ident.make_ascii_lowercase();
    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Check whether `ident` is usable as a plain Rust identifier.
pub fn is_valid_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && ident != "_"
        && !KEYWORDS.contains(&ident)
}

fn replace_invalid(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if !ident.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        ident.insert(0, '_');
    }
    // A lone `_` is the wildcard pattern, not an identifier
    if ident == "_" {
        ident.push('_');
    }
    ident
}

/// Identifiers claimed within one namespace.
#[derive(Debug, Clone)]
pub struct IdentifierScope {
    taken: FxHashSet<String>,
    max_attempts: usize,
}

impl IdentifierScope {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            taken: FxHashSet::default(),
            max_attempts,
        }
    }

    /// Mark an identifier as taken without going through `claim`.
    pub fn reserve(&mut self, ident: impl Into<String>) {
        self.taken.insert(ident.into());
    }

    /// Claim `candidate`, or the first free `candidate_N` for N = 0, 1, 2, …
    ///
    /// Fails after `max_attempts` taken suffixes.
    pub fn claim(&mut self, candidate: String) -> Result<String> {
        if self.taken.insert(candidate.clone()) {
            return Ok(candidate);
        }

        for suffix in 0..self.max_attempts {
            let next = format!("{candidate}_{suffix}");
            if self.taken.insert(next.clone()) {
                return Ok(next);
            }
        }

        Err(GenerateError::IdentifierExhausted {
            name: candidate,
            attempts: self.max_attempts,
        })
    }
}

impl Default for IdentifierScope {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUFFIX_ATTEMPTS)
    }
}
