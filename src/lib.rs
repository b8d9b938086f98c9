//! Rename a batch of files into a contiguous numbered sequence such as
//! `IMG_1020.jpg`, `IMG_1021.jpg`, ..., skipping numbers that files already
//! following the pattern have claimed.
//!
//! The pipeline runs strictly forward: [`parse_rule`] → [`classify_directory`]
//! → [`build_plan`] → [`execute_plan`].

pub mod classify;
pub mod consts;
pub mod error;
pub mod plan;
pub mod rename;
pub mod rule;
pub mod types;

pub use classify::{Classification, classify, classify_directory, scan_directory};
pub use error::{Result, SequenceError};
pub use plan::{SequenceAllocator, build_plan};
pub use rename::{execute_one, execute_plan, execute_plan_with};
pub use rule::parse_rule;
pub use types::{
    ExecutionReport, Extension, FileEntry, PlannedRename, RenameOutcome, RenamePlan,
    ReservedNumbers, Rule,
};
