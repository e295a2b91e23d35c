//! Generator hash marker and artifact validity.
//!
//! Every artifact starts with `// <hash> -- DO NOT EDIT THIS LINE`, where
//! `<hash>` is computed by `build.rs` from the generator's own sources. The
//! hash says nothing about the asset tree: a valid marker only means the
//! artifact was produced by this exact generator.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Hash of the generator sources, stamped at compile time.
pub const GENERATOR_HASH: &str = env!("CRATEGEN_HASH");

const MARKER_PREFIX: &str = "// ";
const MARKER_SUFFIX: &str = " -- DO NOT EDIT THIS LINE";

/// Upper bound on the bytes read while looking for the marker line.
const MARKER_READ_LIMIT: u64 = 256;

/// Build the marker line (without trailing newline) for `hash`.
pub fn build_marker(hash: &str) -> String {
    format!("{MARKER_PREFIX}{hash}{MARKER_SUFFIX}")
}

/// Parse a marker line, returning the embedded hash.
pub fn parse_marker(line: &str) -> Option<&str> {
    let hash = line
        .trim_end_matches(['\r', '\n'])
        .strip_prefix(MARKER_PREFIX)?
        .strip_suffix(MARKER_SUFFIX)?;
    let valid = !hash.is_empty() && hash.chars().all(|c| c.is_ascii_hexdigit());
    valid.then_some(hash)
}

/// Read the marker hash from the first line of an artifact.
pub fn read_marker(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut line = String::new();
    BufReader::new(file.take(MARKER_READ_LIMIT))
        .read_line(&mut line)
        .ok()?;
    parse_marker(&line).map(str::to_string)
}

/// Whether `path` is a regular file stamped with the current generator hash.
pub fn is_valid(path: &Path) -> bool {
    is_valid_with(path, GENERATOR_HASH)
}

/// Whether `path` is a regular file stamped with `expected`.
pub fn is_valid_with(path: &Path, expected: &str) -> bool {
    path.is_file() && read_marker(path).is_some_and(|hash| hash == expected)
}
