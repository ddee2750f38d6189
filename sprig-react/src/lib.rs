//! React component scaffolding for the sprig CLI.
//!
//! This crate turns a user-supplied slash-separated path plus a base-folder
//! choice into an [`Element`] descriptor, and generates the three boilerplate
//! files every element consists of:
//!
//! - `<Name>.tsx` - the component stub (always rewritten)
//! - `index.ts` - the barrel file re-exporting the default export (kept once
//!   it carries content)
//! - `<Name>.module.css` - the stylesheet module (always rewritten)
//!
//! # Usage
//!
//! ```ignore
//! use sprig_react::{FolderKind, Scaffold, resolve};
//!
//! let element = resolve("widgets/Card", FolderKind::Components)?;
//! let scaffold = Scaffold::new(&element);
//!
//! // Relative paths for confirmation, no filesystem access
//! let paths = scaffold.relative_paths();
//!
//! // Write the files under the source root
//! let written = scaffold.generate(Path::new("src"))?;
//! ```

mod element;
mod files;
mod resolver;
mod scaffold;

pub use element::{Element, FolderKind};
pub use files::{ComponentTsx, CssModule, IndexTs};
pub use resolver::{ResolveError, resolve};
pub use scaffold::{PreviewFile, Scaffold, ScaffoldedFile};
