//! Source templates with `__NAME__` placeholders.

use std::marker::PhantomData;

/// Values substituted into a [`Template`].
pub trait TemplateVars {
    /// `(placeholder, value)` pairs, placeholders written as `__NAME__`.
    fn placeholders(&self) -> Vec<(&'static str, &str)>;
}

/// Embedded source text, typed by the variables it expects.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    /// Substitute every placeholder in one left-to-right pass.
    ///
    /// Values are inserted verbatim and never rescanned, so a value that
    /// itself looks like a placeholder is left alone.
    pub fn render(&self, vars: &V) -> String {
        let pairs = vars.placeholders();
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content;

        while let Some(start) = rest.find("__") {
            let hit = pairs
                .iter()
                .find(|(key, _)| rest[start..].starts_with(key));
            match hit {
                Some((key, value)) => {
                    out.push_str(&rest[..start]);
                    out.push_str(value);
                    rest = &rest[start + key.len()..];
                }
                None => {
                    out.push_str(&rest[..start + 2]);
                    rest = &rest[start + 2..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}
