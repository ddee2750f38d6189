//! Barrel file generator.

use std::path::{Path, PathBuf};

use sprig_core::{FileRules, GeneratedFile};

use crate::element::Element;

/// The `index.ts` barrel file forwarding the element's default export.
///
/// Scaffolding a second element into a shared directory must not clobber
/// re-export lines the user has accumulated by hand, so the file is only
/// written while it is absent, empty, or whitespace-only.
pub struct IndexTs<'a> {
    element: &'a Element,
}

impl<'a> IndexTs<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, root: &Path) -> PathBuf {
        root.join(self.element.dir()).join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_empty()
    }

    fn render(&self) -> String {
        format!(
            "export {{ default }} from \"./{}\";\n",
            self.element.name()
        )
    }
}
