//! Artifact emission.
//!
//! # Module Structure
//!
//! - `model` - Lowering of a [`Namespace`] tree into typed items
//! - `render` - Text rendering of the lowered artifact
//!
//! Emission is pure: it never touches the filesystem. Writing the result is
//! the job of [`crate::generate`].

mod model;
mod render;

pub use model::{
    Artifact, CollectionItem, ConstItem, ItemType, Member, ModuleItem, RuntimeItem,
};
pub use render::render;

use crate::asset::ident::is_valid_ident;
use crate::asset::{DEFAULT_COLLECTION_NAME, Namespace};
use crate::error::{GenerateError, Result};
use crate::freshness::GENERATOR_HASH;

/// Default name of the generated root type.
pub const DEFAULT_ROOT_TYPE: &str = "Crate";

/// Default target module path.
pub const DEFAULT_NAMESPACE: &str = "assets";

/// Naming choices for the emitted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Name of the root type wrapping the asset host
    pub root_type: String,
    /// Target module path (`a::b` or `a.b`)
    pub namespace: String,
    /// Name of the per-namespace collection constant
    pub collection_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
        }
    }
}

impl EmitOptions {
    /// Check every name before anything is rendered.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_ident(&self.root_type) {
            return Err(invalid("root type", &self.root_type, "not a Rust identifier"));
        }
        if matches!(self.root_type.as_str(), "Asset" | "FontAsset" | "AssetManager" | "AssetHost") {
            return Err(invalid("root type", &self.root_type, "clashes with a runtime type"));
        }
        if !is_valid_ident(&self.collection_name) {
            return Err(invalid(
                "collection name",
                &self.collection_name,
                "not a Rust identifier",
            ));
        }
        parse_namespace(&self.namespace)?;
        Ok(())
    }
}

/// Split a module path on `::` or `.` and check each segment.
///
/// ```text
/// "assets"          -> ["assets"]
/// "app::res.assets" -> ["app", "res", "assets"]
/// ```
pub fn parse_namespace(namespace: &str) -> Result<Vec<String>> {
    if namespace.trim().is_empty() {
        return Err(invalid("namespace", namespace, "empty"));
    }

    let segments: Vec<String> = namespace
        .split("::")
        .flat_map(|part| part.split('.'))
        .map(str::to_string)
        .collect();

    if segments.iter().any(|s| !is_valid_ident(s)) {
        return Err(invalid(
            "namespace",
            namespace,
            "every segment must be a Rust identifier",
        ));
    }
    Ok(segments)
}

/// Lower and render `tree` with the current generator hash.
pub fn emit(tree: &Namespace, options: &EmitOptions, source: &str) -> Result<String> {
    emit_with_hash(tree, options, source, GENERATOR_HASH)
}

/// Lower and render `tree`, stamping it with `hash`.
pub fn emit_with_hash(
    tree: &Namespace,
    options: &EmitOptions,
    source: &str,
    hash: &str,
) -> Result<String> {
    let artifact = Artifact::lower(tree, options, source, hash)?;
    Ok(render(&artifact))
}

fn invalid(kind: &'static str, value: &str, reason: &'static str) -> GenerateError {
    GenerateError::InvalidNamespace {
        kind,
        value: value.to_string(),
        reason,
    }
}
