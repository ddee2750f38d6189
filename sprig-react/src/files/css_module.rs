//! Stylesheet module generator.

use std::path::{Path, PathBuf};

use sprig_core::{FileRules, GeneratedFile};

use crate::element::Element;

/// The `<Name>.module.css` stylesheet with one empty rule block scoped to
/// the element's class. Rewritten on every run.
pub struct CssModule<'a> {
    element: &'a Element,
}

impl<'a> CssModule<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl GeneratedFile for CssModule<'_> {
    fn path(&self, root: &Path) -> PathBuf {
        root.join(self.element.dir())
            .join(format!("{}.module.css", self.element.name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        format!(".{} {{\n}}\n", self.element.name())
    }
}
