use crate::error::{Result, SequenceError};
use crate::types::{Extension, FileEntry, PlannedRename, RenamePlan, ReservedNumbers, Rule};

/// Hands out the lowest free number at or above the cursor, skipping reserved ones.
#[derive(Debug)]
pub struct SequenceAllocator<'a> {
    reserved: &'a mut ReservedNumbers,
    cursor: u64,
}

impl<'a> SequenceAllocator<'a> {
    pub fn new(start: u64, reserved: &'a mut ReservedNumbers) -> Self {
        Self {
            reserved,
            cursor: start,
        }
    }

    /// Claim the next free number. It is reserved before being returned.
    pub fn next_number(&mut self) -> Result<u64> {
        while self.reserved.contains(&self.cursor) {
            self.cursor = self.advance()?;
        }
        let n = self.cursor;
        self.reserved.insert(n);
        // u64::MAX stays reserved once handed out, so the next call reports exhaustion.
        self.cursor = self.cursor.saturating_add(1);
        Ok(n)
    }

    fn advance(&self) -> Result<u64> {
        self.cursor
            .checked_add(1)
            .ok_or(SequenceError::SequenceExhausted { last: self.cursor })
    }
}

/// Assign target names to `to_rename`, in name order, avoiding `reserved`.
///
/// Every assigned number is added to `reserved`, so the set afterwards holds
/// both the pre-existing numbers and the planned ones.
pub fn build_plan(
    mut to_rename: Vec<FileEntry>,
    rule: &Rule,
    ext: &Extension,
    reserved: &mut ReservedNumbers,
) -> Result<RenamePlan> {
    // Byte-wise ordering on the name, independent of locale.
    to_rename.sort_by(|a, b| a.name.cmp(&b.name));

    let mut allocator = SequenceAllocator::new(rule.start, reserved);
    let mut entries = Vec::with_capacity(to_rename.len());
    for source in to_rename {
        let number = allocator.next_number()?;
        let target_name = rule.target_name(number, ext);
        tracing::debug!(file = %source.name, target = %target_name, number, "planned rename");
        entries.push(PlannedRename {
            source,
            target_name,
            target_number: number,
        });
    }
    Ok(RenamePlan { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::new(PathBuf::from("/d").join(n), *n))
            .collect()
    }

    fn targets(plan: &RenamePlan) -> Vec<(&str, &str)> {
        plan.iter()
            .map(|p| (p.source.name.as_str(), p.target_name.as_str()))
            .collect()
    }

    #[test]
    fn allocator_skips_reserved() {
        let mut reserved = ReservedNumbers::from([3, 4, 6]);
        let mut a = SequenceAllocator::new(3, &mut reserved);
        assert_eq!(a.next_number().unwrap(), 5);
        assert_eq!(a.next_number().unwrap(), 7);
        assert_eq!(a.next_number().unwrap(), 8);
        assert!(reserved.is_superset(&ReservedNumbers::from([3, 4, 5, 6, 7, 8])));
    }

    #[test]
    fn reserved_below_start_is_ignored() {
        let mut reserved = ReservedNumbers::from([1, 2]);
        let mut a = SequenceAllocator::new(10, &mut reserved);
        assert_eq!(a.next_number().unwrap(), 10);
    }

    #[test]
    fn plan_sorts_by_name_and_skips_reserved() {
        let rule: Rule = "IMG_1020".parse().unwrap();
        let ext = Extension::parse("jpg").unwrap();
        let mut reserved = ReservedNumbers::from([1020]);
        let plan = build_plan(entries(&["z.jpg", "a.jpg"]), &rule, &ext, &mut reserved).unwrap();
        assert_eq!(
            targets(&plan),
            [("a.jpg", "IMG_1021.jpg"), ("z.jpg", "IMG_1022.jpg")]
        );
        assert_eq!(plan.entries[0].target_path(), PathBuf::from("/d/IMG_1021.jpg"));
    }

    #[test]
    fn plan_numbers_increase_and_avoid_reserved() {
        let rule: Rule = "P_1".parse().unwrap();
        let ext = Extension::parse("png").unwrap();
        let before = ReservedNumbers::from([1, 2, 5, 9]);
        let mut reserved = before.clone();
        let plan = build_plan(
            entries(&["e.png", "d.png", "c.png", "b.png", "a.png"]),
            &rule,
            &ext,
            &mut reserved,
        )
        .unwrap();
        let numbers: Vec<u64> = plan.iter().map(|p| p.target_number).collect();
        assert_eq!(numbers, [3, 4, 6, 7, 8]);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert!(numbers.iter().all(|n| !before.contains(n)));
    }

    #[test]
    fn plan_sort_is_bytewise() {
        let rule: Rule = "x0".parse().unwrap();
        let ext = Extension::parse("txt").unwrap();
        let mut reserved = ReservedNumbers::new();
        let plan = build_plan(
            entries(&["b.txt", "B.txt", "a.txt", "_.txt"]),
            &rule,
            &ext,
            &mut reserved,
        )
        .unwrap();
        let order: Vec<&str> = plan.iter().map(|p| p.source.name.as_str()).collect();
        assert_eq!(order, ["B.txt", "_.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn plan_padding_preserved_and_widened() {
        let rule: Rule = "IMG_007".parse().unwrap();
        let ext = Extension::parse(".JPG").unwrap();
        let mut reserved = ReservedNumbers::from([7, 8, 9, 10, 11]);
        let plan = build_plan(entries(&["a.jpg"]), &rule, &ext, &mut reserved).unwrap();
        assert_eq!(plan.entries[0].target_name, "IMG_012.JPG");

        let rule: Rule = "IMG_1234".parse().unwrap();
        let rule = Rule { pad_width: 3, ..rule };
        let mut reserved = ReservedNumbers::new();
        let plan = build_plan(entries(&["a.jpg"]), &rule, &ext, &mut reserved).unwrap();
        assert_eq!(plan.entries[0].target_name, "IMG_1234.JPG");
    }

    #[test]
    fn empty_plan() {
        let rule: Rule = "IMG_1".parse().unwrap();
        let ext = Extension::parse("jpg").unwrap();
        let mut reserved = ReservedNumbers::new();
        let plan = build_plan(Vec::new(), &rule, &ext, &mut reserved).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn exhausted_sequence_errors() {
        let rule = Rule {
            prefix: "N".to_string(),
            start: u64::MAX - 1,
            pad_width: 1,
        };
        let ext = Extension::parse("bin").unwrap();
        let mut reserved = ReservedNumbers::new();
        let err = build_plan(
            entries(&["a.bin", "b.bin", "c.bin"]),
            &rule,
            &ext,
            &mut reserved,
        )
        .unwrap_err();
        assert!(matches!(err, SequenceError::SequenceExhausted { .. }));
    }
}
