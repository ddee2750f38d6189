//! Core file-generation substrate for the sprig scaffolder.
//!
//! This crate provides the [`GeneratedFile`] trait together with the
//! overwrite rules that govern how generated files interact with an
//! existing source tree.

mod file;

pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
