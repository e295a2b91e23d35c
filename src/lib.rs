//! crategen: compile an asset directory into a typed, read-only Rust API.
//!
//! Every file becomes a constant descriptor and every directory a nested
//! module. The generated file is stamped with the generator's own hash so a
//! build step can tell whether it must be regenerated.
//!
//! ```ignore
//! use std::path::Path;
//!
//! let out = crategen::generate(Path::new("src"), Path::new("assets"), "assets")?;
//! assert!(crategen::is_artifact_valid(&out.unwrap()));
//! ```

pub mod logger;

pub mod asset;
pub mod config;
pub mod embed;
pub mod emit;
pub mod error;
pub mod freshness;
pub mod generate;

pub use error::{GenerateError, Result};
pub use generate::{GenerateOptions, artifact_path, generate, generate_with, is_artifact_valid};
