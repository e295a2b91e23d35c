//! `crategen tree`: show how the asset directory maps to modules.

use anyhow::{Context, Result};
use crategen::asset::{Asset, Namespace, TreeBuilder, UniformKind};
use crategen::config::CrategenConfig;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::fmt::Write;
use std::path::Path;

pub fn run_tree(assets: Option<&Path>, config: &CrategenConfig) -> Result<()> {
    let options = config.generate_options();
    let dir = assets.unwrap_or(options.input_dir.as_path());

    let tree = TreeBuilder::new(options.tree_options())
        .build(dir)
        .with_context(|| format!("Failed to scan `{}`", dir.display()))?;

    print!("{}", render_tree(&tree, &dir.display().to_string()));
    Ok(())
}

/// Render `tree` as an indented listing, one line per module or constant.
///
/// ```text
/// assets/
/// ├── fonts/ (mod fonts, &[FontAsset])
/// │   └── ROBOTO_BOLD  Roboto-Bold.ttf  "Roboto"
/// └── images/ (mod images, &[Asset])
///     └── LOGO  logo.png
/// ```
pub fn render_tree(tree: &Namespace, label: &str) -> String {
    let label = label.trim_end_matches('/');
    let mut out = format!("{}/\n", label.if_supports_color(Stdout, |t| t.bold()));
    write_children(&mut out, tree, "");
    out
}

fn write_children(out: &mut String, ns: &Namespace, prefix: &str) {
    let total = ns.children.len() + ns.entries.len();

    for (i, child) in ns.children.iter().enumerate() {
        let last = i + 1 == total;
        let collection = match (child.entries.is_empty(), child.uniform_kind()) {
            (true, _) => String::new(),
            (false, UniformKind::Font) => ", &[FontAsset]".to_string(),
            (false, UniformKind::Generic) => ", &[Asset]".to_string(),
        };
        let _ = writeln!(
            out,
            "{prefix}{}{}/ {}",
            branch(last),
            child.name.if_supports_color(Stdout, |t| t.blue()),
            format!("(mod {}{collection})", child.module).if_supports_color(Stdout, |t| t.dimmed())
        );
        write_children(out, child, &format!("{prefix}{}", indent(last)));
    }

    for (i, entry) in ns.entries.iter().enumerate() {
        let last = ns.children.len() + i + 1 == total;
        let _ = write!(
            out,
            "{prefix}{}{}  {}",
            branch(last),
            entry.identifier().if_supports_color(Stdout, |t| t.green()),
            entry.display_name()
        );
        if let Asset::Font(font) = entry {
            let _ = write!(out, "  {:?}", font.font_family);
        }
        out.push('\n');
    }
}

const fn branch(last: bool) -> &'static str {
    if last { "└── " } else { "├── " }
}

const fn indent(last: bool) -> &'static str {
    if last { "    " } else { "│   " }
}
