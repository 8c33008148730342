use crate::app::models::RunSummary;

/// Human-readable result messages shown after a run.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn project_summary(summary: &RunSummary, dry_run: bool) -> String {
        let verb = if dry_run { "would be changed" } else { "were changed" };
        let mut out = format!(
            "{} out of {} files {}.",
            summary.files_changed, summary.files_scanned, verb
        );

        if summary.files_failed > 0 {
            out.push_str(&format!(
                "\n{} files could not be processed (see log output).",
                summary.files_failed
            ));
        }

        out
    }

    pub fn single_file_summary(summary: &RunSummary, dry_run: bool) -> String {
        match (summary.files_changed > 0, dry_run) {
            (true, false) => "Indentation has been reapplied to the current file.".to_string(),
            (true, true) => "Indentation of the current file would change.".to_string(),
            (false, _) => "No indentation changes were needed for the current file.".to_string(),
        }
    }
}
