//! Interactive prompts for the scaffold flow.
//!
//! Every prompt loops until it has a usable answer; invalid input is never a
//! hard failure. Ctrl-C exits quietly, leaving any already-written files in
//! place.

use std::io::ErrorKind;
use std::str::FromStr;

use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use sprig_react::FolderKind;

/// Ask for the base folder until the answer parses.
pub(crate) fn folder_kind() -> Result<FolderKind> {
    loop {
        let raw: String = interact(
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("c - components, p - pages")
                .interact_text(),
        )?;

        match FolderKind::from_str(&raw) {
            Ok(kind) => return Ok(kind),
            Err(err) => println!("{err}"),
        }
    }
}

/// Ask for the element path under the chosen base folder.
///
/// Empty input is accepted here; the resolver decides whether it is usable.
pub(crate) fn element_path(kind: FolderKind) -> Result<String> {
    interact(
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Where under {kind}/?"))
            .allow_empty(true)
            .interact_text(),
    )
}

/// Final go/no-go. Enter counts as yes.
pub(crate) fn confirm() -> Result<bool> {
    interact(
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Ok?")
            .default(true)
            .interact(),
    )
}

/// Unwrap a prompt result, exiting quietly on interrupt.
fn interact<T>(result: dialoguer::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            std::process::exit(130)
        }
        Err(err) => Err(err).wrap_err("prompt failed"),
    }
}
