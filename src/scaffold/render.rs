//! Console rendering for scaffold reports.

use std::path::Path;

use crate::models::{EntryKind, Outcome, Report, ReportEntry};

/// Render one report line for a path.
///
/// Example output:
/// ```text
/// Created directory: src/layouts
/// Directory already exists: public
/// Created file: src/layouts/Layout.astro
/// File already exists, skipping: package.json
/// ```
pub fn render_line(path: &Path, kind: EntryKind, outcome: Outcome, dry_run: bool) -> String {
    let path = path.display();
    match (kind, outcome, dry_run) {
        (EntryKind::Directory, Outcome::Created, false) => format!("Created directory: {}", path),
        (EntryKind::Directory, Outcome::Created, true) => {
            format!("Would create directory: {}", path)
        }
        (EntryKind::Directory, Outcome::AlreadyExists, _) => {
            format!("Directory already exists: {}", path)
        }
        (EntryKind::File, Outcome::Created, false) => format!("Created file: {}", path),
        (EntryKind::File, Outcome::Created, true) => format!("Would create file: {}", path),
        (EntryKind::File, Outcome::AlreadyExists, _) => {
            format!("File already exists, skipping: {}", path)
        }
    }
}

fn render_entry(entry: &ReportEntry, dry_run: bool) -> String {
    render_line(&entry.path, entry.kind, entry.outcome, dry_run)
}

/// Render the root line followed by one line per entry, in report order.
pub fn render_report(report: &Report, dry_run: bool) -> String {
    let mut output = render_line(
        &report.root,
        EntryKind::Directory,
        report.root_outcome,
        dry_run,
    );
    output.push('\n');

    for entry in &report.entries {
        output.push_str(&render_entry(entry, dry_run));
        output.push('\n');
    }
    output
}

/// Render the closing summary line.
pub fn render_summary(report: &Report, label: &str, dry_run: bool) -> String {
    let verb = if dry_run { "would be created" } else { "created" };
    format!(
        "Project structure creation completed ({}): {} {}, {} already existed.",
        label,
        report.created(),
        verb,
        report.already_existed()
    )
}
