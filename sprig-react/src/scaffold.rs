//! Scaffold batch driving the file generators for one element.

use std::path::Path;

use eyre::Result;
use sprig_core::{GeneratedFile, WriteResult};

use crate::{
    element::Element,
    files::{ComponentTsx, CssModule, IndexTs},
};

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Slash-separated path relative to the source root
    pub path: String,
    /// Rendered content
    pub content: String,
}

/// A file touched by [`Scaffold::generate`]
#[derive(Debug)]
pub struct ScaffoldedFile {
    /// Slash-separated path relative to the source root
    pub path: String,
    /// Whether the file was written or kept as-is
    pub result: WriteResult,
}

/// The ordered set of generators for one element.
///
/// The set is fixed: component stub, then barrel, then stylesheet. Order
/// only determines the sequence of filesystem operations and of reported
/// paths; each generator touches a distinct file.
pub struct Scaffold<'a> {
    files: Vec<Box<dyn GeneratedFile + 'a>>,
}

impl<'a> Scaffold<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self {
            files: vec![
                Box::new(ComponentTsx::new(element)),
                Box::new(IndexTs::new(element)),
                Box::new(CssModule::new(element)),
            ],
        }
    }

    /// Paths relative to the source root, in generation order.
    ///
    /// Computed purely from the descriptor, so the list is identical before
    /// and after [`generate`](Self::generate).
    pub fn relative_paths(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| relative_display(file.as_ref()))
            .collect()
    }

    /// Preview all files without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files
            .iter()
            .map(|file| PreviewFile {
                path: relative_display(file.as_ref()),
                content: file.render(),
            })
            .collect()
    }

    /// Write all files under the source root, in generation order.
    pub fn generate(&self, root: &Path) -> Result<Vec<ScaffoldedFile>> {
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let result = file.write(root)?;
            written.push(ScaffoldedFile {
                path: relative_display(file.as_ref()),
                result,
            });
        }
        Ok(written)
    }
}

/// Slash-separated path relative to the source root.
fn relative_display(file: &dyn GeneratedFile) -> String {
    file.path(Path::new(""))
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use crate::{FolderKind, resolve};

    use super::*;

    #[test]
    fn test_relative_paths_in_generation_order() {
        let element = resolve("widgets/Card", FolderKind::Components).unwrap();
        let scaffold = Scaffold::new(&element);

        assert_eq!(
            scaffold.relative_paths(),
            vec![
                "components/widgets/Card.tsx",
                "components/widgets/index.ts",
                "components/widgets/Card.module.css",
            ]
        );
    }

    #[test]
    fn test_single_segment_paths_use_dedicated_folder() {
        let element = resolve("Button", FolderKind::Pages).unwrap();
        let scaffold = Scaffold::new(&element);

        assert_eq!(
            scaffold.relative_paths(),
            vec![
                "pages/Button/Button.tsx",
                "pages/Button/index.ts",
                "pages/Button/Button.module.css",
            ]
        );
    }

    #[test]
    fn test_preview_matches_relative_paths() {
        let element = resolve("widgets/Card", FolderKind::Components).unwrap();
        let scaffold = Scaffold::new(&element);

        let preview = scaffold.preview();
        let paths: Vec<String> = preview.into_iter().map(|f| f.path).collect();
        assert_eq!(paths, scaffold.relative_paths());
    }
}
