//! Inline `style=""` editing.
//!
//! The carousel only ever writes `display`, but pages ship their own inline
//! declarations on sections and arrows, so edits keep everything else in
//! the order it was written.

use std::fmt;

/// Ordered list of `property: value` declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parse an inline `style="..."` attribute value.
    pub fn parse(style: &str) -> Self {
        let mut decls = Vec::new();
        for decl in style.split(';') {
            let Some((prop, val)) = decl.split_once(':') else {
                continue;
            };
            let prop = prop.trim().to_ascii_lowercase();
            let val = val.trim();
            if prop.is_empty() {
                continue;
            }
            decls.push((prop, val.to_string()));
        }
        Self { decls }
    }

    /// Last declaration wins, as in the cascade.
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|(p, _)| p.eq_ignore_ascii_case(prop))
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, prop: &str, value: &str) {
        let prop = prop.to_ascii_lowercase();
        self.decls.retain(|(p, _)| *p != prop);
        self.decls.push((prop, value.to_string()));
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prop, val)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", prop, val)?;
        }
        Ok(())
    }
}
