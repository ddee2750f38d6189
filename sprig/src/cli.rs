//! CLI definition and the run flow.

use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use sprig_react::{Element, FolderKind, Scaffold, resolve};

use crate::{
    prompt,
    report::{PlanReport, PreviewReport, Report, ScaffoldReport, TerminalOutput},
};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "Scaffold React component directories")]
pub(crate) struct Cli {
    /// Element path under the base folder, e.g. "widgets/Card" (prompted when omitted)
    path: Option<String>,

    /// Base folder: c (components) or p (pages) (prompted when omitted)
    #[arg(short, long)]
    kind: Option<FolderKind>,

    /// Source root the base folders live under
    #[arg(long, default_value = "src")]
    root: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Show the files that would be created without writing anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let kind = match self.kind {
            Some(kind) => kind,
            None => prompt::folder_kind()?,
        };

        let element = self.resolve_element(kind)?;
        let scaffold = Scaffold::new(&element);
        let mut out = TerminalOutput::new();

        if self.dry_run {
            PreviewReport::new(scaffold.preview()).render(&mut out);
            return Ok(());
        }

        if !self.yes {
            let paths = scaffold.relative_paths();
            PlanReport::new(&paths).render(&mut out);
            if !prompt::confirm()? {
                println!("Ok, exiting without creating anything.");
                return Ok(());
            }
        }

        let written = scaffold.generate(&self.root)?;
        ScaffoldReport::new(written).render(&mut out);

        Ok(())
    }

    /// Resolve the element, re-prompting while the name resolves empty.
    ///
    /// A path given on the command line has no prompt to fall back to, so
    /// resolution failures there abort with the error instead.
    fn resolve_element(&self, kind: FolderKind) -> Result<Element> {
        if let Some(raw) = &self.path {
            return Ok(resolve(raw, kind)?);
        }

        loop {
            let raw = prompt::element_path(kind)?;
            match resolve(&raw, kind) {
                Ok(element) => return Ok(element),
                Err(err) => println!("{err}"),
            }
        }
    }
}
