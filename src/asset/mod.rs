//! Asset directory scanning and namespace tree construction.

pub mod font;
pub mod ident;
mod kind;
mod scan;
mod tree;

// Types
pub use kind::{AssetKind, FONT_EXTENSIONS, file_stem};
pub use scan::{ScanEntry, compare_names, scan_dir};
pub use tree::{
    Asset, AssetDescriptor, DEFAULT_COLLECTION_NAME, FontAssetDescriptor, Namespace, TreeBuilder,
    TreeOptions, UniformKind, build_tree,
};
