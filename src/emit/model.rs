//! Structured artifact model.
//!
//! Lowering turns a [`Namespace`] tree into typed items (constants,
//! collections, modules) with every naming and typing decision already made,
//! so rendering is a single formatting pass.

use crate::asset::{Asset, Namespace, UniformKind};
use crate::embed::runtime::{ASSET_TYPE, FONT_ASSET_TYPE};
use crate::error::Result;

use super::EmitOptions;

/// Descriptor type of a constant or collection element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemType {
    Asset,
    FontAsset,
}

impl ItemType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Asset => ASSET_TYPE,
            Self::FontAsset => FONT_ASSET_TYPE,
        }
    }
}

/// `pub const IDENT: Ty = Ty::new(...);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstItem {
    pub ident: String,
    pub ty: ItemType,
    pub path: String,
    pub name: String,
    /// Present iff `ty` is `FontAsset`
    pub font_name: Option<String>,
}

/// One element of a collection constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub ident: String,
    /// Font constant listed in an `Asset` collection (rendered as `IDENT.asset()`)
    pub upcast: bool,
}

/// `pub const LIST: &[Ty] = &[...];`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub ident: String,
    pub element: ItemType,
    pub members: Vec<Member>,
}

/// A module: the artifact root or one subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleItem {
    /// Module identifier (empty for the root)
    pub ident: String,
    /// Directory path below the asset root, for the doc comment
    pub dir: String,
    /// Nesting depth; the root is 0
    pub depth: usize,
    /// Runtime types this module must import from the root
    pub imports: Vec<ItemType>,
    pub constants: Vec<ConstItem>,
    pub collection: Option<CollectionItem>,
    pub modules: Vec<ModuleItem>,
}

/// Fixed runtime surface parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeItem {
    pub root_type: String,
    pub namespace: String,
    pub source: String,
}

/// Complete artifact, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Generator hash written on the first line
    pub hash: String,
    pub runtime: RuntimeItem,
    pub root: ModuleItem,
}

impl Artifact {
    /// Lower `tree` into an artifact stamped with `hash`.
    ///
    /// `source` names the asset directory in the header comment.
    pub fn lower(tree: &Namespace, options: &EmitOptions, source: &str, hash: &str) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            hash: hash.to_string(),
            runtime: RuntimeItem {
                root_type: options.root_type.clone(),
                namespace: options.namespace.clone(),
                source: source.to_string(),
            },
            root: lower_module(tree, options, "", 0),
        })
    }
}

fn lower_module(ns: &Namespace, options: &EmitOptions, parent_dir: &str, depth: usize) -> ModuleItem {
    let dir = match (parent_dir.is_empty(), ns.is_root()) {
        (_, true) => String::new(),
        (true, false) => ns.name.clone(),
        (false, false) => format!("{parent_dir}/{}", ns.name),
    };

    let constants: Vec<ConstItem> = ns.entries.iter().map(lower_const).collect();
    let collection = ns
        .has_collection()
        .then(|| lower_collection(ns, &options.collection_name));

    let mut imports: Vec<ItemType> = constants.iter().map(|c| c.ty).collect();
    imports.extend(collection.as_ref().map(|c| c.element));
    imports.sort_unstable();
    imports.dedup();
    if depth == 0 {
        // Runtime types are defined at the root
        imports.clear();
    }

    let modules = ns
        .children
        .iter()
        .map(|child| lower_module(child, options, &dir, depth + 1))
        .collect();

    ModuleItem {
        ident: ns.module.clone(),
        dir,
        depth,
        imports,
        constants,
        collection,
        modules,
    }
}

fn lower_const(asset: &Asset) -> ConstItem {
    let ty = match asset {
        Asset::Generic(_) => ItemType::Asset,
        Asset::Font(_) => ItemType::FontAsset,
    };
    ConstItem {
        ident: asset.identifier().to_string(),
        ty,
        path: asset.relative_path().to_string(),
        name: asset.display_name().to_string(),
        font_name: asset.font_family().map(str::to_string),
    }
}

fn lower_collection(ns: &Namespace, ident: &str) -> CollectionItem {
    let element = match ns.uniform_kind() {
        UniformKind::Font => ItemType::FontAsset,
        UniformKind::Generic => ItemType::Asset,
    };
    let members = ns
        .entries
        .iter()
        .map(|asset| Member {
            ident: asset.identifier().to_string(),
            upcast: element == ItemType::Asset && matches!(asset, Asset::Font(_)),
        })
        .collect();

    CollectionItem {
        ident: ident.to_string(),
        element,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::build_tree;
    use std::fs;
    use tempfile::TempDir;

    fn lower_dir(dir: &std::path::Path) -> Artifact {
        let tree = build_tree(dir).unwrap();
        Artifact::lower(&tree, &EmitOptions::default(), "assets", "abcd").unwrap()
    }

    #[test]
    fn test_lower_uniform_font_collection() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/A.ttf"), "x").unwrap();
        fs::write(dir.path().join("fonts/B.otf"), "x").unwrap();

        let artifact = lower_dir(dir.path());
        assert!(artifact.root.collection.is_none());
        assert!(artifact.root.imports.is_empty());

        let fonts = &artifact.root.modules[0];
        assert_eq!(fonts.ident, "fonts");
        assert_eq!(fonts.dir, "fonts");
        assert_eq!(fonts.depth, 1);
        assert_eq!(fonts.imports, [ItemType::FontAsset]);
        let list = fonts.collection.as_ref().unwrap();
        assert_eq!(list.ident, "LIST");
        assert_eq!(list.element, ItemType::FontAsset);
        assert!(list.members.iter().all(|m| !m.upcast));
        assert_eq!(fonts.constants[0].font_name.as_deref(), Some("A.ttf"));
    }

    #[test]
    fn test_lower_mixed_collection_upcasts_fonts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ttf"), "x").unwrap();
        fs::write(dir.path().join("b.png"), "x").unwrap();

        let artifact = lower_dir(dir.path());
        let list = artifact.root.collection.as_ref().unwrap();
        assert_eq!(list.element, ItemType::Asset);
        assert_eq!(
            list.members,
            [
                Member { ident: "A".into(), upcast: true },
                Member { ident: "B".into(), upcast: false },
            ]
        );
        assert_eq!(artifact.root.constants[0].ty, ItemType::FontAsset);
        assert_eq!(artifact.root.constants[1].ty, ItemType::Asset);
        assert_eq!(artifact.root.constants[1].font_name, None);
    }

    #[test]
    fn test_lower_nested_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ui/Icons")).unwrap();
        fs::write(dir.path().join("ui/Icons/x.svg"), "x").unwrap();

        let artifact = lower_dir(dir.path());
        let ui = &artifact.root.modules[0];
        assert!(ui.imports.is_empty());
        assert_eq!(ui.modules.len(), 1);

        let icons = &ui.modules[0];
        assert_eq!(icons.ident, "icons");
        assert_eq!(icons.dir, "ui/Icons");
        assert_eq!(icons.depth, 2);
        assert_eq!(icons.imports, [ItemType::Asset]);
    }

    #[test]
    fn test_lower_rejects_bad_root_type() {
        let dir = TempDir::new().unwrap();
        let tree = build_tree(dir.path()).unwrap();
        let options = EmitOptions {
            root_type: "not valid".into(),
            ..EmitOptions::default()
        };
        assert!(Artifact::lower(&tree, &options, "assets", "abcd").is_err());
    }
}
