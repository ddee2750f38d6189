//! Path resolution from raw user input to an element descriptor.

use std::path::PathBuf;

use thiserror::Error;

use crate::element::{Element, FolderKind};

/// Errors from resolving raw input into an [`Element`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The final path segment is empty (blank input or trailing slash).
    #[error("element name is empty, the path must end in a name (not '/')")]
    EmptyName,
}

/// Resolve a slash-separated path string into an [`Element`].
///
/// The last segment becomes the element name. With more than one segment the
/// directory is the base folder plus all segments except the last; a single
/// segment gets a dedicated directory named after the element:
///
/// - `"widgets/Card"` under components -> `components/widgets`, name `Card`
/// - `"Card"` under components -> `components/Card`, name `Card`
///
/// Segments are taken as-is, with no character-set validation. Pure
/// computation; the source root is joined on later, at write time.
pub fn resolve(raw: &str, kind: FolderKind) -> Result<Element, ResolveError> {
    let segments: Vec<&str> = raw.split('/').collect();

    let name = segments.last().copied().unwrap_or_default();
    if name.is_empty() {
        return Err(ResolveError::EmptyName);
    }

    let mut dir = PathBuf::from(kind.as_str());
    if segments.len() > 1 {
        for segment in &segments[..segments.len() - 1] {
            dir.push(segment);
        }
    } else {
        dir.push(name);
    }

    Ok(Element::new(name, dir, kind))
}
