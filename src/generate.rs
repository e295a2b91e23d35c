//! Generation entry points: scan, emit and write one artifact.
//!
//! ```ignore
//! // assets/ -> out/assets.rs
//! let path = generate(Path::new("out"), Path::new("assets"), "assets")?;
//!
//! // on the next run
//! if !is_artifact_valid(&path.unwrap()) { /* regenerate */ }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::NamedTempFile;

use crate::asset::ident::DEFAULT_MAX_SUFFIX_ATTEMPTS;
use crate::asset::{DEFAULT_COLLECTION_NAME, FONT_EXTENSIONS, TreeBuilder, TreeOptions};
use crate::emit::{self, DEFAULT_NAMESPACE, DEFAULT_ROOT_TYPE, EmitOptions};
use crate::error::{GenerateError, Result};
use crate::freshness;
use crate::{debug, log};

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the artifact (created if missing)
    pub output_root: PathBuf,
    /// Asset directory to scan
    pub input_dir: PathBuf,
    /// Target module path (`a::b` is written to `a/b.rs`)
    pub namespace: String,
    pub root_type: String,
    pub collection_name: String,
    /// Extensions classified as fonts (case-insensitive)
    pub font_extensions: Vec<String>,
    pub max_suffix_attempts: usize,
}

impl GenerateOptions {
    pub fn new(output_root: impl Into<PathBuf>, input_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            input_dir: input_dir.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            font_extensions: FONT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            font_extensions: self.font_extensions.clone(),
            max_suffix_attempts: self.max_suffix_attempts,
            collection_name: self.collection_name.clone(),
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            root_type: self.root_type.clone(),
            namespace: self.namespace.clone(),
            collection_name: self.collection_name.clone(),
        }
    }

    /// Where the artifact for these options is written.
    pub fn artifact_path(&self) -> Result<PathBuf> {
        artifact_path(&self.output_root, &self.namespace)
    }

    /// Name of the asset directory, for the artifact header.
    fn source_name(&self) -> String {
        self.input_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_dir.display().to_string())
    }
}

/// Generate `output_root/<namespace>.rs` from `input_dir` with default options.
///
/// Returns `Ok(None)` without touching the filesystem when `input_dir` is
/// missing or not a directory.
pub fn generate(output_root: &Path, input_dir: &Path, namespace: &str) -> Result<Option<PathBuf>> {
    generate_with(&GenerateOptions::new(output_root, input_dir).with_namespace(namespace))
}

/// Generate an artifact and write it atomically.
pub fn generate_with(options: &GenerateOptions) -> Result<Option<PathBuf>> {
    let start = Instant::now();

    let Some(text) = render_artifact(options)? else {
        return Ok(None);
    };

    let path = options.artifact_path()?;
    write_atomic(&path, &text)?;

    log!("build"; "{} in {:.2?}", path.display(), start.elapsed());
    Ok(Some(path))
}

/// Scan and render without writing. `Ok(None)` when there is nothing to scan.
pub fn render_artifact(options: &GenerateOptions) -> Result<Option<String>> {
    if !options.input_dir.is_dir() {
        debug!("build"; "skipped: {} is not a directory", options.input_dir.display());
        return Ok(None);
    }

    let emit_options = options.emit_options();
    emit_options.validate()?;

    let tree = TreeBuilder::new(options.tree_options()).build(&options.input_dir)?;
    debug!(
        "build";
        "{} assets in {} namespaces",
        tree.asset_count(),
        tree.namespace_count() + 1
    );

    emit::emit(&tree, &emit_options, &options.source_name()).map(Some)
}

/// Whether the artifact at `path` was produced by this generator build.
pub fn is_artifact_valid(path: &Path) -> bool {
    let start = Instant::now();
    let valid = freshness::is_valid(path);
    debug!(
        "check";
        "{} is {} ({:.2?})",
        path.display(),
        if valid { "valid" } else { "stale" },
        start.elapsed()
    );
    valid
}

/// `output_root/a/b.rs` for namespace `a::b`.
pub fn artifact_path(output_root: &Path, namespace: &str) -> Result<PathBuf> {
    let segments = emit::parse_namespace(namespace)?;
    let mut path = output_root.to_path_buf();
    path.extend(&segments);
    path.set_extension("rs");
    Ok(path)
}

/// Write through a temporary file in the destination directory, then rename.
fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let write_err = |err| GenerateError::ArtifactWrite(path.to_path_buf(), err);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    std::fs::create_dir_all(parent).map_err(write_err)?;
    let mut file = NamedTempFile::new_in(parent).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
