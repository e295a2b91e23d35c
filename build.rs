//! Build script for stamping the generator hash.
//!
//! The hash covers every source file that shapes generated output, so any
//! change to scanning, naming or rendering invalidates existing artifacts.

use jwalk::WalkDir;
use std::fs;
use std::path::PathBuf;

const HASHED_DIRS: &[&str] = &["src/asset", "src/emit", "src/embed"];

fn main() {
    let mut files: Vec<PathBuf> = HASHED_DIRS
        .iter()
        .flat_map(|dir| WalkDir::new(dir).into_iter())
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect();
    files.sort();

    let mut hasher = blake3::Hasher::new();
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    for file in &files {
        let content = fs::read(file).expect("Failed to read generator source");
        // Path is part of the hash so moving code between files counts as a change
        hasher.update(file.to_string_lossy().replace('\\', "/").as_bytes());
        hasher.update(&content);
    }

    let hash = hasher.finalize().to_hex();
    println!("cargo:rustc-env=CRATEGEN_HASH={}", &hash[..32]);

    for dir in HASHED_DIRS {
        println!("cargo:rerun-if-changed={dir}");
    }
}
