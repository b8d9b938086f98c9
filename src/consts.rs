use regex::Regex;
use std::sync::LazyLock;

/// Splits a rule into its literal prefix and the longest trailing run of ASCII digits.
pub static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(.*?)([0-9]+)$").unwrap());

/// Digit group used when matching already-conforming file names.
pub const SEQUENCE_DIGITS: &str = "([0-9]+)";
