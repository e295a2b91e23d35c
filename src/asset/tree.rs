//! Namespace tree construction.
//!
//! Mirrors an asset directory as a tree of [`Namespace`] nodes:
//!
//! ```text
//! assets/                     Namespace ""          entries: []
//! ├── fonts/                  ├── Namespace "fonts"  entries: [ROBOTO_BOLD]  (font)
//! │   └── Roboto-Bold.ttf     │
//! └── images/                 └── Namespace "images" entries: [LOGO]         (generic)
//!     └── logo.png
//! ```
//!
//! The tree is rebuilt from the live directory on every run and never
//! persisted. Building reads the filesystem only.

use std::fs;
use std::path::{Path, PathBuf};

use super::font::font_family;
use super::ident::{self, DEFAULT_MAX_SUFFIX_ATTEMPTS, IdentifierScope};
use super::kind::{AssetKind, FONT_EXTENSIONS};
use super::scan::scan_dir;
use crate::embed::runtime::RESERVED_ROOT_MODULES;
use crate::error::{GenerateError, Result};
use crate::{debug, log};

/// Name of the per-namespace collection constant.
pub const DEFAULT_COLLECTION_NAME: &str = "LIST";

// ============================================================================
// Descriptors
// ============================================================================

/// A single file exposed through the generated API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// Constant name, unique within the owning namespace
    pub identifier: String,
    /// Path relative to the scan root, always `/`-separated
    pub relative_path: String,
    /// Original file name
    pub display_name: String,
}

/// A font file: a descriptor plus its family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAssetDescriptor {
    pub asset: AssetDescriptor,
    /// Extracted family name, or `asset.display_name` when extraction failed
    pub font_family: String,
}

/// Entry of a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Generic(AssetDescriptor),
    Font(FontAssetDescriptor),
}

impl Asset {
    /// Shared descriptor fields, whatever the variant.
    pub const fn descriptor(&self) -> &AssetDescriptor {
        match self {
            Self::Generic(asset) => asset,
            Self::Font(font) => &font.asset,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.descriptor().identifier
    }

    pub fn relative_path(&self) -> &str {
        &self.descriptor().relative_path
    }

    pub fn display_name(&self) -> &str {
        &self.descriptor().display_name
    }

    pub fn font_family(&self) -> Option<&str> {
        match self {
            Self::Generic(_) => None,
            Self::Font(font) => Some(&font.font_family),
        }
    }

    pub const fn kind(&self) -> AssetKind {
        match self {
            Self::Generic(_) => AssetKind::Generic,
            Self::Font(_) => AssetKind::Font,
        }
    }
}

// ============================================================================
// Namespace
// ============================================================================

/// Element type shared by every entry of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniformKind {
    /// Every entry so far is a font
    #[default]
    Font,
    /// At least one entry is not a font (sticky)
    Generic,
}

/// One directory of the asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Directory name on disk (empty for the root)
    pub name: String,
    /// Module identifier derived from `name` (empty for the root)
    pub module: String,
    /// Subdirectories in scan order
    pub children: Vec<Namespace>,
    /// Files in scan order
    pub entries: Vec<Asset>,
    uniform_kind: UniformKind,
}

impl Namespace {
    fn new(name: String, module: String) -> Self {
        Self {
            name,
            module,
            children: Vec::new(),
            entries: Vec::new(),
            uniform_kind: UniformKind::Font,
        }
    }

    pub const fn uniform_kind(&self) -> UniformKind {
        self.uniform_kind
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether a collection constant is emitted for this namespace.
    pub fn has_collection(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of files in this namespace and all descendants.
    pub fn asset_count(&self) -> usize {
        self.entries.len() + self.children.iter().map(Self::asset_count).sum::<usize>()
    }

    /// Number of namespaces below this one.
    pub fn namespace_count(&self) -> usize {
        self.children.len() + self.children.iter().map(Self::namespace_count).sum::<usize>()
    }

    fn push(&mut self, asset: Asset) {
        if asset.kind() != AssetKind::Font {
            self.uniform_kind = UniformKind::Generic;
        }
        self.entries.push(asset);
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Knobs for tree construction.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Extensions classified as fonts (case-insensitive)
    pub font_extensions: Vec<String>,
    /// Suffix attempts before `IdentifierExhausted`
    pub max_suffix_attempts: usize,
    /// Collection constant name, reserved in every namespace
    pub collection_name: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            font_extensions: FONT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
        }
    }
}

/// Builds a [`Namespace`] tree from a directory.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: TreeOptions,
}

impl TreeBuilder {
    pub fn new(options: TreeOptions) -> Self {
        Self { options }
    }

    /// Build the tree rooted at `root`; relative paths are computed from `root`.
    pub fn build(&self, root: &Path) -> Result<Namespace> {
        if !root.is_dir() {
            return Err(GenerateError::InvalidInput(root.to_path_buf()));
        }

        let mut namespace = Namespace::new(String::new(), String::new());
        let mut ancestors = vec![canonical(root)?];
        self.fill(&mut namespace, root, "", &mut ancestors)?;
        Ok(namespace)
    }

    /// Populate `namespace` from `dir`, whose path below the root is `prefix`.
    ///
    /// `ancestors` holds the canonical paths of `dir` and every directory
    /// above it; a subdirectory resolving to one of them is a symlink cycle
    /// and is skipped.
    fn fill(
        &self,
        namespace: &mut Namespace,
        dir: &Path,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut scope = IdentifierScope::new(self.options.max_suffix_attempts);
        scope.reserve(self.options.collection_name.as_str());
        let mut modules = IdentifierScope::new(self.options.max_suffix_attempts);
        if prefix.is_empty() {
            for name in RESERVED_ROOT_MODULES {
                modules.reserve(*name);
            }
        }

        for entry in scan_dir(dir)? {
            let relative_path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{prefix}/{}", entry.name)
            };

            if entry.is_dir {
                let real = canonical(&entry.path)?;
                if ancestors.contains(&real) {
                    log!("warning"; "skipping `{}`: symlink cycle to `{}`", relative_path, real.display());
                    continue;
                }

                let module = modules.claim(ident::module_name(&entry.name))?;
                let mut child = Namespace::new(entry.name.clone(), module);
                ancestors.push(real);
                self.fill(&mut child, &entry.path, &relative_path, ancestors)?;
                ancestors.pop();
                namespace.children.push(child);
                continue;
            }

            let kind = AssetKind::classify(&entry.name, &self.options.font_extensions);
            let identifier = scope.claim(ident::constant_name(&entry.name))?;
            let asset = AssetDescriptor {
                identifier,
                relative_path,
                display_name: entry.name,
            };

            let asset = match kind {
                AssetKind::Font => {
                    let font_family =
                        font_family(&entry.path).unwrap_or_else(|| asset.display_name.clone());
                    Asset::Font(FontAssetDescriptor { asset, font_family })
                }
                AssetKind::Generic => Asset::Generic(asset),
            };

            debug!("scan"; "{} -> {}", asset.relative_path(), asset.identifier());
            namespace.push(asset);
        }

        Ok(())
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|err| GenerateError::Io(path.to_path_buf(), err))
}

/// Build a tree with default options.
pub fn build_tree(root: &Path) -> Result<Namespace> {
    TreeBuilder::default().build(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "not really a file of that type").unwrap();
    }

    fn child<'a>(ns: &'a Namespace, name: &str) -> &'a Namespace {
        ns.children.iter().find(|c| c.name == name).unwrap()
    }

    fn identifiers(ns: &Namespace) -> Vec<&str> {
        ns.entries.iter().map(Asset::identifier).collect()
    }

    #[test]
    fn test_fonts_and_images() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "fonts/Roboto-Bold.ttf");
        touch(dir.path(), "images/logo.png");

        let root = build_tree(dir.path()).unwrap();
        assert!(root.is_root());
        assert!(root.entries.is_empty());
        assert!(!root.has_collection());
        assert_eq!(root.children.len(), 2);

        let fonts = child(&root, "fonts");
        assert_eq!(identifiers(fonts), ["ROBOTO_BOLD"]);
        assert_eq!(fonts.uniform_kind(), UniformKind::Font);
        let font = &fonts.entries[0];
        assert_eq!(font.relative_path(), "fonts/Roboto-Bold.ttf");
        assert_eq!(font.display_name(), "Roboto-Bold.ttf");
        // Not a parseable font, so the family falls back to the file name
        assert_eq!(font.font_family(), Some("Roboto-Bold.ttf"));

        let images = child(&root, "images");
        assert_eq!(identifiers(images), ["LOGO"]);
        assert_eq!(images.uniform_kind(), UniformKind::Generic);
        assert_eq!(images.entries[0].font_family(), None);
    }

    #[test]
    fn test_font_family_from_name_table() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        let data = crate::asset::font::sample_font(&[
            (ttf_parser::name_id::FAMILY, "Test Sans Regular"),
            (ttf_parser::name_id::TYPOGRAPHIC_FAMILY, "Test Sans"),
        ]);
        fs::write(dir.path().join("fonts/Test-Regular.ttf"), data).unwrap();

        let root = build_tree(dir.path()).unwrap();
        let font = &child(&root, "fonts").entries[0];
        assert_eq!(font.identifier(), "TEST_REGULAR");
        assert_eq!(font.display_name(), "Test-Regular.ttf");
        assert_eq!(font.font_family(), Some("Test Sans"));
    }

    #[test]
    fn test_case_collision() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "A.PNG");

        let root = build_tree(dir.path()).unwrap();
        // "A.PNG" sorts before "a.png" on the exact tie-break
        assert_eq!(identifiers(&root), ["A", "A_0"]);
        assert_eq!(root.entries[0].display_name(), "A.PNG");
        assert_eq!(root.entries[1].display_name(), "a.png");
    }

    #[test]
    fn test_sanitized_collisions_keep_every_entry() {
        let dir = TempDir::new().unwrap();
        for name in ["my file.png", "my-file.png", "my_file.png", "my.file.png"] {
            touch(dir.path(), name);
        }

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(root.entries.len(), 4);
        let mut ids = identifiers(&root);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(ids.iter().all(|id| ident::is_valid_ident(id)));
    }

    #[test]
    fn test_collection_name_is_reserved() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "list.txt");

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(identifiers(&root), ["LIST_0"]);
    }

    #[test]
    fn test_mixed_namespace_degrades_to_generic() {
        let dir = TempDir::new().unwrap();
        // Scan order: a.ttf, b.png, c.otf
        touch(dir.path(), "a.ttf");
        touch(dir.path(), "b.png");
        touch(dir.path(), "c.otf");

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(root.uniform_kind(), UniformKind::Generic);
        assert_eq!(root.entries[0].kind(), AssetKind::Font);
        assert_eq!(root.entries[1].kind(), AssetKind::Generic);
        assert_eq!(root.entries[2].kind(), AssetKind::Font);
    }

    #[test]
    fn test_directories_without_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        touch(dir.path(), "a/b/c/deep.bin");

        let root = build_tree(dir.path()).unwrap();
        let a = child(&root, "a");
        let b = child(&a, "b");
        let c = child(&b, "c");
        assert!(!a.has_collection() && !b.has_collection());
        assert_eq!(c.entries[0].relative_path(), "a/b/c/deep.bin");
        assert_eq!(root.asset_count(), 1);
        assert_eq!(root.namespace_count(), 3);
    }

    #[test]
    fn test_empty_subdirectory_is_kept() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let root = build_tree(dir.path()).unwrap();
        let empty = child(&root, "empty");
        assert!(empty.entries.is_empty() && empty.children.is_empty());
    }

    #[test]
    fn test_module_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Sound FX/click.wav");
        touch(dir.path(), "type/t.txt");

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(child(&root, "Sound FX").module, "sound_fx");
        assert_eq!(child(&root, "type").module, "type_");
    }

    #[test]
    fn test_module_name_collision() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Icons/a.svg");
        touch(dir.path(), "icons/b.svg");

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(child(&root, "Icons").module, "icons");
        assert_eq!(child(&root, "icons").module, "icons_0");
    }

    #[test]
    fn test_root_modules_avoid_runtime_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "io/x.png");
        touch(dir.path(), "std/y.png");
        touch(dir.path(), "nested/io/z.png");

        let root = build_tree(dir.path()).unwrap();
        assert_eq!(child(&root, "io").module, "io_0");
        assert_eq!(child(&root, "std").module, "std_0");
        // Only the artifact root is shared with the runtime surface
        assert_eq!(child(child(&root, "nested"), "io").module, "io");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "sub/a.png");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

        let root = build_tree(dir.path()).unwrap();
        let sub = child(&root, "sub");
        assert!(sub.children.is_empty());
        assert_eq!(identifiers(sub), ["A"]);
        assert_eq!(root.namespace_count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_sibling_is_followed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "other/b.png");
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("other"), dir.path().join("sub/link")).unwrap();

        let root = build_tree(dir.path()).unwrap();
        let link = child(child(&root, "sub"), "link");
        assert_eq!(identifiers(link), ["B"]);
        assert_eq!(link.entries[0].relative_path(), "sub/link/b.png");
    }

    #[test]
    fn test_deterministic() {
        let dir = TempDir::new().unwrap();
        for rel in ["z.png", "B.txt", "b.TXT", "x/1.ttf", "X2/y.otf", "m n.gif"] {
            touch(dir.path(), rel);
        }

        let first = build_tree(dir.path()).unwrap();
        let second = build_tree(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_font_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.woff2");
        touch(dir.path(), "b.ttf");

        let builder = TreeBuilder::new(TreeOptions {
            font_extensions: vec!["woff2".to_string()],
            ..TreeOptions::default()
        });
        let root = builder.build(dir.path()).unwrap();
        assert_eq!(root.entries[0].kind(), AssetKind::Font);
        assert_eq!(root.entries[1].kind(), AssetKind::Generic);
    }

    #[test]
    fn test_identifier_exhausted() {
        let dir = TempDir::new().unwrap();
        for name in ["a.png", "a.jpg", "a.gif"] {
            touch(dir.path(), name);
        }

        let builder = TreeBuilder::new(TreeOptions {
            max_suffix_attempts: 1,
            ..TreeOptions::default()
        });
        assert!(matches!(
            builder.build(dir.path()),
            Err(GenerateError::IdentifierExhausted { .. })
        ));
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            build_tree(&dir.path().join("missing")),
            Err(GenerateError::InvalidInput(_))
        ));
    }
}
