use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the absolute file path under the source root
    fn path(&self, root: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk under the source root.
    ///
    /// Parent directories are created as needed. Re-running against an
    /// existing tree never fails: files guarded by [`Overwrite::IfEmpty`]
    /// are left untouched once they carry non-whitespace content.
    fn write(&self, root: &Path) -> Result<WriteResult> {
        let path = self.path(root);
        let rules = self.rules();

        match rules.overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfEmpty => {
                if has_content(&path)? {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Whether the file already carries non-whitespace content.
///
/// A missing file counts as empty; any other read failure propagates.
fn has_content(path: &Path) -> Result<bool> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(!content.trim().is_empty()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => {
            Err(err).wrap_err_with(|| format!("failed to read '{}'", path.display()))
        }
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already has content)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files fully owned by the generator (always rewritten)
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for files the user may have edited (kept once non-empty)
    pub fn if_empty() -> Self {
        Self {
            overwrite: Overwrite::IfEmpty,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only write when the file is absent, empty, or whitespace-only
    IfEmpty,
}
