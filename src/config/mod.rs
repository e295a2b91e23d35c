//! Project configuration from `crategen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError
//! ├── util       # config discovery, path resolution
//! └── mod.rs     # CrategenConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[generate]` | Input/output paths, namespace and naming knobs   |
//!
//! A missing file is not an error: every field has a default.

mod error;
mod util;

pub use error::ConfigError;
pub use util::{find_config_file, resolve_path};

use crate::asset::ident::DEFAULT_MAX_SUFFIX_ATTEMPTS;
use crate::asset::{DEFAULT_COLLECTION_NAME, FONT_EXTENSIONS};
use crate::emit::{DEFAULT_NAMESPACE, DEFAULT_ROOT_TYPE};
use crate::generate::GenerateOptions;
use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "crategen.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing crategen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrategenConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Generation settings
    #[serde(default)]
    pub generate: GenerateSection,
}

/// `[generate]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateSection {
    /// Asset directory to scan
    pub assets: PathBuf,
    /// Directory receiving the artifact
    pub output: PathBuf,
    /// Target module path
    pub namespace: String,
    /// Name of the generated root type
    pub root_type: String,
    /// Name of the per-namespace collection constant
    pub collection: String,
    /// Extensions classified as fonts
    pub font_extensions: Vec<String>,
    /// Collision suffixes tried before giving up
    pub max_suffix_attempts: usize,
}

impl Default for GenerateSection {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            output: PathBuf::from("src"),
            namespace: DEFAULT_NAMESPACE.to_string(),
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            collection: DEFAULT_COLLECTION_NAME.to_string(),
            font_extensions: FONT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
        }
    }
}

impl CrategenConfig {
    /// Search upward from `start` for `config_name` and load it.
    ///
    /// Falls back to defaults rooted at `start` when no file is found.
    pub fn discover(start: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start, config_name) {
            Some(path) => Self::from_path(&path),
            None => {
                let mut config = Self::default();
                config.root = start.to_path_buf();
                Ok(config)
            }
        }
    }

    /// Load a config file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        config.config_path = Some(path.to_path_buf());
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Reject values no run could succeed with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generate = &self.generate;
        if generate.namespace.trim().is_empty() {
            return Err(ConfigError::Validation("`generate.namespace` is empty".into()));
        }
        if let Some(ext) = generate
            .font_extensions
            .iter()
            .find(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "`generate.font_extensions` contains an empty extension `{ext}`"
            )));
        }
        Ok(())
    }

    /// Asset directory, resolved against the config root.
    pub fn assets_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.generate.assets)
    }

    /// Output directory, resolved against the config root.
    pub fn output_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.generate.output)
    }

    /// Generation options for this configuration.
    pub fn generate_options(&self) -> GenerateOptions {
        let generate = &self.generate;
        let mut options = GenerateOptions::new(self.output_dir(), self.assets_dir());
        options.namespace = generate.namespace.clone();
        options.root_type = generate.root_type.clone();
        options.collection_name = generate.collection.clone();
        options.font_extensions = generate
            .font_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        options.max_suffix_attempts = generate.max_suffix_attempts;
        options
    }
}

// ============================================================================
// tests
// ============================================================================
