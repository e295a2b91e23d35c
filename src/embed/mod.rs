//! Embedded source fragments for generated artifacts.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `runtime` - Fixed runtime surface prepended to every artifact
//!   (`Asset`, `FontAsset`, host traits and the root type)
//!
//! # Usage
//!
//! ```ignore
//! use embed::runtime::{RUNTIME_RS, RuntimeVars};
//!
//! let text = RUNTIME_RS.render(&RuntimeVars {
//!     root_type: "Crate",
//!     namespace: "assets",
//!     source: "assets",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod runtime {
    use super::{Template, TemplateVars};

    /// Variables for the runtime surface template.
    pub struct RuntimeVars<'a> {
        /// Name of the generated root type
        pub root_type: &'a str,
        /// Target module path, for the header comment
        pub namespace: &'a str,
        /// Asset directory name, for the header comment
        pub source: &'a str,
    }

    impl TemplateVars for RuntimeVars<'_> {
        fn placeholders(&self) -> Vec<(&'static str, &str)> {
            vec![
                ("__ROOT_TYPE__", self.root_type),
                ("__NAMESPACE__", self.namespace),
                ("__SOURCE__", self.source),
            ]
        }
    }

    /// Runtime surface: descriptor types, host contract and root type.
    pub const RUNTIME_RS: Template<RuntimeVars<'static>> =
        Template::new(include_str!("runtime.rs.in"));

    /// Type names defined by the runtime surface, in the order they appear.
    pub const ASSET_TYPE: &str = "Asset";
    pub const FONT_ASSET_TYPE: &str = "FontAsset";

    /// Module names no directory may take at the artifact root.
    pub const RESERVED_ROOT_MODULES: &[&str] = &["alloc", "core", "io", "std"];

}
