use crate::bisect::Bisection;
use crate::error::Result;
use crate::vcs::VcsKind;
use serde::Serialize;
use std::path::Path;

/// The line printed on success.
pub fn summary_line(result: &Bisection) -> String {
    format!("the last passing commit/revision is: {}", result.commit)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    vcs: VcsKind,
    repository: &'a Path,
    #[serde(flatten)]
    result: &'a Bisection,
}

/// Renders the outcome, with its probe trace, as pretty-printed JSON.
pub fn json_report(kind: VcsKind, root: &Path, result: &Bisection) -> Result<String> {
    let report = JsonReport {
        vcs: kind,
        repository: root,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
