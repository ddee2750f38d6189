//! Report rendering for the scaffold flow.
//!
//! Reports describe *what* to show; [`Output`] implementations decide how to
//! render it.

use sprig_core::WriteResult;
use sprig_react::{PreviewFile, ScaffoldedFile};

/// Target output for reports.
pub(crate) trait Output {
    /// Start a section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a created file.
    fn added_item(&mut self, text: &str);

    /// Render a file that was left untouched.
    fn kept_item(&mut self, text: &str);

    /// Render a separator with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub(crate) trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub(crate) struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn kept_item(&mut self, text: &str) {
        println!("  = {} (kept)", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Files about to be created, shown before the confirmation prompt.
pub(crate) struct PlanReport<'a> {
    paths: &'a [String],
}

impl<'a> PlanReport<'a> {
    pub fn new(paths: &'a [String]) -> Self {
        Self { paths }
    }
}

impl Report for PlanReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.section("Files to create");
        for path in self.paths {
            out.list_item(path);
        }
        out.newline();
    }
}

/// Dry-run preview of every file's rendered content.
pub(crate) struct PreviewReport {
    files: Vec<PreviewFile>,
}

impl PreviewReport {
    pub fn new(files: Vec<PreviewFile>) -> Self {
        Self { files }
    }
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}

/// Post-write summary distinguishing created files from a kept barrel.
pub(crate) struct ScaffoldReport {
    files: Vec<ScaffoldedFile>,
}

impl ScaffoldReport {
    pub fn new(files: Vec<ScaffoldedFile>) -> Self {
        Self { files }
    }
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Scaffolded");
        for file in &self.files {
            match file.result {
                WriteResult::Written => out.added_item(&file.path),
                WriteResult::Skipped => out.kept_item(&file.path),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every output call as a flat line for assertions.
    #[derive(Default)]
    struct RecordingOutput {
        lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("section:{name}"));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("item:{text}"));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("added:{text}"));
        }

        fn kept_item(&mut self, text: &str) {
            self.lines.push(format!("kept:{text}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("divider:{label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(format!("pre:{text}"));
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }

    #[test]
    fn test_plan_report_lists_paths_in_order() {
        let paths = vec![
            "components/widgets/Card.tsx".to_string(),
            "components/widgets/index.ts".to_string(),
            "components/widgets/Card.module.css".to_string(),
        ];
        let mut out = RecordingOutput::default();

        PlanReport::new(&paths).render(&mut out);

        assert_eq!(out.lines[0], "section:Files to create");
        assert_eq!(out.lines[1], "item:components/widgets/Card.tsx");
        assert_eq!(out.lines[2], "item:components/widgets/index.ts");
        assert_eq!(out.lines[3], "item:components/widgets/Card.module.css");
    }

    #[test]
    fn test_scaffold_report_marks_kept_files() {
        let files = vec![
            ScaffoldedFile {
                path: "components/widgets/Card.tsx".to_string(),
                result: WriteResult::Written,
            },
            ScaffoldedFile {
                path: "components/widgets/index.ts".to_string(),
                result: WriteResult::Skipped,
            },
        ];
        let mut out = RecordingOutput::default();

        ScaffoldReport::new(files).render(&mut out);

        assert_eq!(out.lines[1], "added:components/widgets/Card.tsx");
        assert_eq!(out.lines[2], "kept:components/widgets/index.ts");
    }

    #[test]
    fn test_preview_report_ends_with_summary() {
        let files = vec![PreviewFile {
            path: "components/Card/Card.module.css".to_string(),
            content: ".Card {\n}\n".to_string(),
        }];
        let mut out = RecordingOutput::default();

        PreviewReport::new(files).render(&mut out);

        assert_eq!(out.lines[0], "divider:components/Card/Card.module.css");
        assert_eq!(out.lines.last().unwrap(), "pre:1 files would be generated");
    }
}
