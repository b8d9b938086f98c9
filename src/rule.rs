use crate::consts::RULE_RE;
use crate::error::{Result, SequenceError};
use crate::types::{Extension, Rule};
use std::path::{Component, Path};
use std::str::FromStr;

/// Whether `prefix` followed by digits stays a single name inside the target directory.
fn is_file_name_prefix(prefix: &str) -> bool {
    if prefix.contains(['/', '\\']) {
        return false;
    }
    let candidate = format!("{prefix}0");
    let mut parts = Path::new(&candidate).components();
    matches!(
        (parts.next(), parts.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Parse a rule like `IMG_1020` into prefix, start number and pad width.
///
/// The trailing digit run is taken greedily, so `IMG2_0050` yields prefix
/// `IMG2_`, start `50` and width `4`.
pub fn parse_rule(rule: &str) -> Result<Rule> {
    let caps = RULE_RE
        .captures(rule)
        .ok_or_else(|| SequenceError::InvalidRule {
            rule: rule.to_string(),
        })?;
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let digits = caps.get(2).map_or("", |m| m.as_str());
    if !is_file_name_prefix(prefix) {
        return Err(SequenceError::PrefixNotFileName {
            prefix: prefix.to_string(),
        });
    }
    let start = digits
        .parse::<u64>()
        .map_err(|_| SequenceError::RuleNumberTooLarge {
            digits: digits.to_string(),
        })?;
    let parsed = Rule {
        prefix: prefix.to_string(),
        start,
        pad_width: digits.len(),
    };
    tracing::debug!(rule, prefix = %parsed.prefix, start, pad_width = parsed.pad_width, "parsed rule");
    Ok(parsed)
}

impl FromStr for Rule {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rule(s)
    }
}

impl Extension {
    /// Normalize a user-supplied extension (`jpg` or `.jpg`) to `.jpg`,
    /// keeping its casing.
    pub fn parse(ext: &str) -> Result<Self> {
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if bare.is_empty() || bare.contains(['/', '\\']) {
            return Err(SequenceError::InvalidExtension {
                ext: ext.to_string(),
            });
        }
        Ok(Extension::from_dotted(format!(".{bare}")))
    }
}
