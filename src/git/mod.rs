//! Git history walking and quad mapping
//!
//! `walker` wraps the git2 collaborator (repository access, history
//! iteration, tree listing, tree diffing); `importer` is the mapping
//! engine that turns each commit into its quad set.

/// History-to-graph mapping engine and import entry point
pub mod importer;
/// Repository access plumbing over git2
pub mod walker;

pub use importer::{import, ImportStats, Importer};
pub use walker::{BlobRef, ChangeEntry, ChangeKind};
