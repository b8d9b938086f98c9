use crate::types::{ExecutionReport, PlannedRename, RenameOutcome, RenamePlan, ReservedNumbers};
use std::fs;
use std::path::Path;

/// Whether anything (including a dangling symlink) already sits at `path`.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Rename a single planned entry, re-checking the target right before the move.
///
/// A skipped entry's number is inserted into `reserved`, so the set stays
/// complete for plans that were not built by [`build_plan`](crate::build_plan)
/// and for callers that plan again after executing.
pub fn execute_one(entry: PlannedRename, reserved: &mut ReservedNumbers) -> RenameOutcome {
    let target = entry.target_path();
    if occupied(&target) {
        tracing::warn!(
            file = %entry.source.name,
            target = %entry.target_name,
            "target already exists; skipping"
        );
        reserved.insert(entry.target_number);
        return RenameOutcome::Skipped(entry);
    }

    match fs::rename(&entry.source.path, &target) {
        Ok(()) => {
            tracing::debug!(from = %entry.source.name, to = %entry.target_name, "renamed");
            RenameOutcome::Renamed(entry)
        }
        Err(error) => {
            tracing::warn!(file = %entry.source.name, error = %error, "rename failed");
            RenameOutcome::Failed { entry, error }
        }
    }
}

/// Execute every entry of `plan` in order. Per-file problems are recorded in
/// the report and never stop the batch.
pub fn execute_plan(plan: RenamePlan, reserved: &mut ReservedNumbers) -> ExecutionReport {
    execute_plan_with(plan, reserved, |_| {})
}

/// Like [`execute_plan`], calling `on_outcome` as soon as each entry is done.
pub fn execute_plan_with(
    plan: RenamePlan,
    reserved: &mut ReservedNumbers,
    mut on_outcome: impl FnMut(&RenameOutcome),
) -> ExecutionReport {
    let mut report = ExecutionReport::default();
    for entry in plan.entries {
        let outcome = execute_one(entry, reserved);
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }
    tracing::debug!(
        renamed = report.renamed(),
        skipped = report.skipped(),
        failed = report.failed(),
        "executed plan"
    );
    report
}
