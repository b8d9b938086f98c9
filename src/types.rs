use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A parsed naming rule such as `IMG_1020`.
///
/// - `prefix`: the literal text in front of the trailing digits (`IMG_`).
/// - `start`: the value of the trailing digits (`1020`).
/// - `pad_width`: how many digits the rule was written with, so `IMG_007`
///   keeps generating three-digit names.
///
/// # Examples
///
/// ```rust
/// use smart_sequence_rename::types::{Extension, Rule};
///
/// let rule: Rule = "IMG_007".parse().unwrap();
/// let ext = Extension::parse("jpg").unwrap();
///
/// assert_eq!(rule.target_name(12, &ext), "IMG_012.jpg");
/// assert_eq!(rule.target_name(1234, &ext), "IMG_1234.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub prefix: String,
    pub start: u64,
    pub pad_width: usize,
}

impl Rule {
    /// Zero-pad `number` to at least `pad_width` digits. Wider numbers are kept whole.
    pub fn format_number(&self, number: u64) -> String {
        format!("{number:0width$}", width = self.pad_width)
    }

    /// Build the file name `prefix + padded number + extension`.
    pub fn target_name(&self, number: u64, ext: &Extension) -> String {
        format!("{}{}{}", self.prefix, self.format_number(number), ext.as_str())
    }
}

/// A target extension, always stored with a leading dot and in the casing the
/// user supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension(String);

impl Extension {
    /// The extension including its leading dot, e.g. `.jpg`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The extension without its leading dot, e.g. `jpg`.
    pub fn bare(&self) -> &str {
        &self.0[1..]
    }

    /// Whether the last extension of `path` equals this one, ignoring case.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.to_lowercase() == self.bare().to_lowercase())
    }

    pub(crate) fn from_dotted(dotted: String) -> Self {
        debug_assert!(dotted.starts_with('.') && dotted.len() > 1);
        Self(dotted)
    }
}

/// A regular file found by a single, non-recursive directory scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: PathBuf, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

/// Sequence numbers already claimed, either by conforming files on disk or by
/// earlier entries of the plan being built.
pub type ReservedNumbers = BTreeSet<u64>;

/// One step of a [`RenamePlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub source: FileEntry,
    pub target_name: String,
    pub target_number: u64,
}

impl PlannedRename {
    /// Full path of the rename target, next to the source file.
    pub fn target_path(&self) -> PathBuf {
        match self.source.path.parent() {
            Some(dir) => dir.join(&self.target_name),
            None => PathBuf::from(&self.target_name),
        }
    }
}

/// The ordered list of renames computed before anything on disk changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenamePlan {
    pub entries: Vec<PlannedRename>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedRename> {
        self.entries.iter()
    }
}

/// What happened to a single planned rename.
#[derive(Debug)]
pub enum RenameOutcome {
    /// The file now carries its target name.
    Renamed(PlannedRename),
    /// Something already occupied the target name when the rename was due.
    Skipped(PlannedRename),
    /// The filesystem refused the rename.
    Failed {
        entry: PlannedRename,
        error: std::io::Error,
    },
}

impl RenameOutcome {
    pub fn entry(&self) -> &PlannedRename {
        match self {
            RenameOutcome::Renamed(e) | RenameOutcome::Skipped(e) => e,
            RenameOutcome::Failed { entry, .. } => entry,
        }
    }
}

/// Result of executing a whole plan.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl ExecutionReport {
    /// Number of files actually renamed.
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
