//! Run reporting on stderr.

use std::path::Path;

use bindoc_site::GenerateSummary;
use console::{Style, Term};

/// Progress and result lines for the `site` and `rbs` commands.
pub(crate) struct Output {
    term: Term,
    label: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().bold(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// `Label: path`, with the label in bold.
    pub(crate) fn location(&self, label: &str, path: &Path) {
        let label = self.label.apply_to(format!("{label}:"));
        self.write(&format!("{label} {}", path.display()));
    }

    /// Result of a site run. Unresolved names turn the line yellow.
    pub(crate) fn site_written(&self, summary: &GenerateSummary, dir: &Path) {
        let style = if summary.unlinked == 0 {
            &self.green
        } else {
            &self.yellow
        };
        self.write(&style.apply_to(site_line(summary, dir)).to_string());
    }

    pub(crate) fn signatures_written(&self, files: usize, dir: &Path) {
        let line = format!("Wrote {files} signature files to {}", dir.display());
        self.write(&self.green.apply_to(line).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.write(&self.yellow.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.write(&self.red.apply_to(msg).to_string());
    }

    fn write(&self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

fn site_line(summary: &GenerateSummary, dir: &Path) -> String {
    let pages = if summary.pages == 1 { "page" } else { "pages" };
    format!(
        "Wrote {} {pages} to {} ({} links, {} unresolved)",
        summary.pages,
        dir.display(),
        summary.linked,
        summary.unlinked
    )
}
