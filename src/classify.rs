use crate::consts::SEQUENCE_DIGITS;
use crate::error::{Result, SequenceError};
use crate::types::{Extension, FileEntry, ReservedNumbers, Rule};
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;

/// Files with the target extension, split by whether they already follow the rule.
#[derive(Debug, Default, Clone)]
pub struct Classification {
    /// Files named `prefix + digits + ext`. Their numbers are in `reserved`.
    pub conforming: Vec<FileEntry>,
    /// Everything else with the target extension, in scan order.
    pub to_rename: Vec<FileEntry>,
    pub reserved: ReservedNumbers,
}

impl Classification {
    /// True when the directory had no file with the target extension at all.
    pub fn is_empty(&self) -> bool {
        self.conforming.is_empty() && self.to_rename.is_empty()
    }
}

/// List regular files directly inside `dir` whose extension matches `ext`.
pub fn scan_directory(dir: &Path, ext: &Extension) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(SequenceError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let read_err = |source: std::io::Error| SequenceError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() || !ext.matches(&path) {
            continue;
        }
        match path.file_name().and_then(|s| s.to_str()) {
            Some(name) => {
                tracing::trace!(file = name, "matched extension");
                let name = name.to_string();
                out.push(FileEntry::new(path, name));
            }
            None => tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name"),
        }
    }
    tracing::debug!(dir = %dir.display(), count = out.len(), "scanned directory");
    Ok(out)
}

/// Build the `^prefix([0-9]+)ext$` matcher with prefix and extension taken literally.
pub fn conforming_pattern(rule: &Rule, ext: &Extension) -> Result<Regex> {
    let pattern = format!(
        "^{}{}{}$",
        regex::escape(&rule.prefix),
        SEQUENCE_DIGITS,
        regex::escape(ext.as_str())
    );
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Parse the sequence number out of `name` if it already follows the rule.
///
/// `Some(None)` means the name conforms but its digits overflow `u64`; such a
/// number can never collide with a generated one.
fn conforming_number(pattern: &Regex, name: &str) -> Option<Option<u64>> {
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u64>().ok())
}

/// Partition `entries` into conforming files and files that need renaming.
pub fn classify(entries: Vec<FileEntry>, rule: &Rule, ext: &Extension) -> Result<Classification> {
    let pattern = conforming_pattern(rule, ext)?;
    let mut out = Classification::default();
    for entry in entries {
        match conforming_number(&pattern, &entry.name) {
            Some(number) => {
                if let Some(n) = number {
                    out.reserved.insert(n);
                }
                tracing::trace!(file = %entry.name, number = ?number, "already conforms");
                out.conforming.push(entry);
            }
            None => {
                tracing::trace!(file = %entry.name, "needs renaming");
                out.to_rename.push(entry);
            }
        }
    }
    tracing::debug!(
        conforming = out.conforming.len(),
        to_rename = out.to_rename.len(),
        reserved = out.reserved.len(),
        "classified files"
    );
    Ok(out)
}

/// Scan `dir` and classify its files against `rule`.
pub fn classify_directory(dir: &Path, rule: &Rule, ext: &Extension) -> Result<Classification> {
    let entries = scan_directory(dir, ext)?;
    classify(entries, rule, ext)
}
