//! Text rendering of an [`Artifact`].

use super::model::{Artifact, CollectionItem, ConstItem, ItemType, ModuleItem};
use crate::embed::runtime::{RUNTIME_RS, RuntimeVars};
use crate::freshness::build_marker;

const INDENT: &str = "    ";

/// Line-oriented writer with indentation.
struct CodeWriter {
    buf: String,
    level: usize,
}

impl CodeWriter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            level: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Single empty line, never doubled.
    fn blank(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with("\n\n") && !self.buf.ends_with("{\n") {
            self.buf.push('\n');
        }
    }

    /// Append pre-formatted text verbatim, re-indented to the current level.
    fn block(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.buf.push('\n');
            } else {
                self.line(line);
            }
        }
    }

    fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.level += 1;
    }

    fn close(&mut self) {
        self.level -= 1;
        self.line("}");
    }

    fn finish(mut self) -> String {
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        self.buf
    }
}

/// Render the artifact to Rust source.
pub fn render(artifact: &Artifact) -> String {
    let mut w = CodeWriter::new();

    w.line(&build_marker(&artifact.hash));
    w.block(&RUNTIME_RS.render(&RuntimeVars {
        root_type: &artifact.runtime.root_type,
        namespace: &artifact.runtime.namespace,
        source: &artifact.runtime.source,
    }));

    render_module_body(&mut w, &artifact.root);
    w.finish()
}

fn render_module_body(w: &mut CodeWriter, module: &ModuleItem) {
    if !module.imports.is_empty() {
        w.blank();
        w.line(&format!("use {}{};", super_path(module.depth), import_list(&module.imports)));
    }

    for constant in &module.constants {
        w.blank();
        render_const(w, constant);
    }

    if let Some(collection) = &module.collection {
        w.blank();
        render_collection(w, collection);
    }

    for child in &module.modules {
        w.blank();
        w.line(&format!("/// `{}/`", doc_text(&child.dir)));
        w.open(&format!("pub mod {}", child.ident));
        render_module_body(w, child);
        w.close();
    }
}

fn super_path(depth: usize) -> String {
    "super::".repeat(depth)
}

/// Doc comments are single-line: control characters become spaces.
fn doc_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn import_list(imports: &[ItemType]) -> String {
    match imports {
        [single] => single.name().to_string(),
        many => {
            let names: Vec<_> = many.iter().map(|ty| ty.name()).collect();
            format!("{{{}}}", names.join(", "))
        }
    }
}

fn render_const(w: &mut CodeWriter, item: &ConstItem) {
    let ty = item.ty.name();
    w.line(&format!("/// `{}`", doc_text(&item.path)));

    let mut value = format!("{ty}::new({:?}, {:?}", item.path, item.name);
    if let Some(font_name) = &item.font_name {
        value.push_str(&format!(", {font_name:?}"));
    }
    value.push(')');

    w.line(&format!("pub const {}: {ty} = {value};", item.ident));
}

fn render_collection(w: &mut CodeWriter, item: &CollectionItem) {
    w.line(&format!(
        "pub const {}: &[{}] = &[",
        item.ident,
        item.element.name()
    ));
    w.level += 1;

    for member in &item.members {
        if member.upcast {
            w.line(&format!("{}.asset(),", member.ident));
        } else {
            w.line(&format!("{},", member.ident));
        }
    }

    w.level -= 1;
    w.line("];");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::model::{Member, RuntimeItem};

    fn module(ident: &str, dir: &str, depth: usize) -> ModuleItem {
        ModuleItem {
            ident: ident.into(),
            dir: dir.into(),
            depth,
            imports: Vec::new(),
            constants: Vec::new(),
            collection: None,
            modules: Vec::new(),
        }
    }

    fn artifact(root: ModuleItem) -> Artifact {
        Artifact {
            hash: "0123abcd".into(),
            runtime: RuntimeItem {
                root_type: "Crate".into(),
                namespace: "assets".into(),
                source: "assets".into(),
            },
            root,
        }
    }

    #[test]
    fn test_marker_is_first_line() {
        let text = render(&artifact(module("", "", 0)));
        assert_eq!(
            text.lines().next(),
            Some("// 0123abcd -- DO NOT EDIT THIS LINE")
        );
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_render_nested_module() {
        let mut fonts = module("fonts", "fonts", 1);
        fonts.imports = vec![ItemType::FontAsset];
        fonts.constants.push(ConstItem {
            ident: "ROBOTO_BOLD".into(),
            ty: ItemType::FontAsset,
            path: "fonts/Roboto-Bold.ttf".into(),
            name: "Roboto-Bold.ttf".into(),
            font_name: Some("Roboto".into()),
        });
        fonts.collection = Some(CollectionItem {
            ident: "LIST".into(),
            element: ItemType::FontAsset,
            members: vec![Member {
                ident: "ROBOTO_BOLD".into(),
                upcast: false,
            }],
        });
        let mut root = module("", "", 0);
        root.modules.push(fonts);

        let text = render(&artifact(root));
        let expected = "\
/// `fonts/`
pub mod fonts {
    use super::FontAsset;

    /// `fonts/Roboto-Bold.ttf`
    pub const ROBOTO_BOLD: FontAsset = FontAsset::new(\"fonts/Roboto-Bold.ttf\", \"Roboto-Bold.ttf\", \"Roboto\");

    pub const LIST: &[FontAsset] = &[
        ROBOTO_BOLD,
    ];
}
";
        assert!(text.ends_with(expected), "{text}");
    }

    #[test]
    fn test_render_mixed_collection() {
        let mut root = module("", "", 0);
        root.collection = Some(CollectionItem {
            ident: "LIST".into(),
            element: ItemType::Asset,
            members: vec![
                Member {
                    ident: "A".into(),
                    upcast: true,
                },
                Member {
                    ident: "B".into(),
                    upcast: false,
                },
            ],
        });

        let text = render(&artifact(root));
        assert!(text.ends_with("pub const LIST: &[Asset] = &[\n    A.asset(),\n    B,\n];\n"));
    }

    #[test]
    fn test_render_escapes_strings() {
        let mut root = module("", "", 0);
        root.constants.push(ConstItem {
            ident: "QUOTE".into(),
            ty: ItemType::Asset,
            path: "say \"hi\"\\.txt".into(),
            name: "say \"hi\"\\.txt".into(),
            font_name: None,
        });

        let text = render(&artifact(root));
        assert!(text.contains(r#"Asset::new("say \"hi\"\\.txt", "say \"hi\"\\.txt")"#));
    }

    #[test]
    fn test_doc_text_is_single_line() {
        assert_eq!(doc_text("a\nb\tc.png"), "a b c.png");
        assert_eq!(doc_text("plain/path.png"), "plain/path.png");
    }

    #[test]
    fn test_deep_imports() {
        assert_eq!(super_path(3), "super::super::super::");
        assert_eq!(import_list(&[ItemType::Asset]), "Asset");
        assert_eq!(
            import_list(&[ItemType::Asset, ItemType::FontAsset]),
            "{Asset, FontAsset}"
        );
    }
}
