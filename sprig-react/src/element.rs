//! Element descriptor and base-folder types.

use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

/// Base folders a UI element can be placed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    /// Reusable components
    Components,
    /// Page-level elements
    Pages,
}

impl FolderKind {
    /// Returns the folder name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderKind::Components => "components",
            FolderKind::Pages => "pages",
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FolderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "components" => Ok(FolderKind::Components),
            "p" | "pages" => Ok(FolderKind::Pages),
            _ => Err(format!(
                "unknown base folder '{}', expected 'c' (components) or 'p' (pages)",
                s
            )),
        }
    }
}

/// Resolved target for one scaffolding run.
///
/// Created once by [`resolve`](crate::resolve) and borrowed by every file
/// generator afterwards. The directory is kept relative to the source root;
/// absolute paths are only formed by joining it onto the root at write time,
/// so all writes stay under the root by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    dir: PathBuf,
    kind: FolderKind,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>, dir: PathBuf, kind: FolderKind) -> Self {
        Self {
            name: name.into(),
            dir,
            kind,
        }
    }

    /// Leaf identifier of the element, never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory the files are written to, relative to the source root.
    ///
    /// Always starts with the folder-kind segment.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Base folder the element was placed under.
    pub fn kind(&self) -> FolderKind {
        self.kind
    }
}
