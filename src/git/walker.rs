/// Repository access plumbing over git2
///
/// Everything the mapper needs from the version-control backend:
/// opening the repository and resolving its identity, the full-history
/// walk, the per-commit file listing, and the tree diff against the
/// first parent. The revwalk is an RAII value, so its resources are
/// released on every exit path of the walk.
use crate::error::{SourceError, TraversalError};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{Commit, ObjectType, Oid, Repository, Revwalk, Signature, TreeWalkMode, TreeWalkResult};
use std::path::Path;

/// A blob (file version) at a specific path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    /// Content hash of the blob.
    pub id: Oid,
    /// Path of the file inside the commit's tree.
    pub path: String,
}

/// Classification of one tree-diff entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Path exists only in the commit's tree.
    Insert,
    /// Path exists only in the first parent's tree.
    Delete,
    /// Path exists in both trees with different content.
    Modify,
}

/// One per-path change between a commit and its first parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    /// Blob in the parent's tree; `None` for inserts.
    pub before: Option<BlobRef>,
    /// Blob in the commit's tree; `None` for deletes.
    pub after: Option<BlobRef>,
}

/// Open the repository at `location` and resolve its graph identity.
///
/// The identity is the URL of the `origin` remote when one is
/// configured, otherwise the given location verbatim.
pub fn open_repository(location: &Path) -> Result<(Repository, String), SourceError> {
    let repo = Repository::discover(location).map_err(|e| SourceError::OpenFailed {
        path: location.display().to_string(),
        reason: e.message().to_string(),
    })?;

    let identity = repo
        .find_remote("origin")
        .ok()
        .and_then(|origin| origin.url().map(|url| url.to_string()))
        .unwrap_or_else(|| location.display().to_string());

    tracing::info!("Opened git repository at: {}", location.display());
    Ok((repo, identity))
}

/// Start a full-history walk from HEAD.
///
/// Commits are yielded in the order git2's revwalk provides them; the
/// import does not re-sort them.
pub fn history(repo: &Repository) -> Result<Revwalk<'_>, TraversalError> {
    let mut revwalk = repo
        .revwalk()
        .map_err(|e| TraversalError::WalkFailed(e.message().to_string()))?;
    revwalk
        .push_head()
        .map_err(|e| TraversalError::WalkFailed(e.message().to_string()))?;
    Ok(revwalk)
}

/// List every file present in the commit's snapshot.
pub fn list_files(commit: &Commit<'_>) -> Result<Vec<BlobRef>, TraversalError> {
    let tree = commit
        .tree()
        .map_err(|e| TraversalError::TreeLookupFailed {
            oid: commit.id().to_string(),
            reason: e.message().to_string(),
        })?;

    let mut files = Vec::new();
    tree.walk(TreeWalkMode::PreOrder, |root, entry| {
        if entry.kind() == Some(ObjectType::Blob) {
            if let Some(name) = entry.name() {
                files.push(BlobRef {
                    id: entry.id(),
                    path: format!("{}{}", root, name),
                });
            }
        }
        TreeWalkResult::Ok
    })
    .map_err(|e| TraversalError::FileListFailed {
        oid: commit.id().to_string(),
        reason: e.message().to_string(),
    })?;

    Ok(files)
}

/// Diff the commit's tree against its first parent's tree.
///
/// Root commits diff against the empty tree, so every file shows up as
/// an insert. Delta kinds other than insert/delete/modify are dropped
/// here; they produce no change fact.
pub fn diff_first_parent(
    repo: &Repository,
    commit: &Commit<'_>,
) -> Result<Vec<ChangeEntry>, TraversalError> {
    let oid = commit.id().to_string();

    let tree = commit.tree().map_err(|e| TraversalError::TreeLookupFailed {
        oid: oid.clone(),
        reason: e.message().to_string(),
    })?;

    let parent_tree = if commit.parent_count() > 0 {
        let parent = commit.parent(0).map_err(|e| TraversalError::CommitLookupFailed {
            oid: oid.clone(),
            reason: e.message().to_string(),
        })?;
        Some(parent.tree().map_err(|e| TraversalError::TreeLookupFailed {
            oid: parent.id().to_string(),
            reason: e.message().to_string(),
        })?)
    } else {
        None
    };

    let diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
        .map_err(|e| TraversalError::DiffFailed {
            oid: oid.clone(),
            reason: e.message().to_string(),
        })?;

    let mut changes = Vec::new();
    for delta in diff.deltas() {
        let kind = match delta.status() {
            git2::Delta::Added => ChangeKind::Insert,
            git2::Delta::Deleted => ChangeKind::Delete,
            git2::Delta::Modified => ChangeKind::Modify,
            other => {
                tracing::debug!("Skipping delta kind {:?} in commit {}", other, oid);
                continue;
            }
        };
        changes.push(ChangeEntry {
            kind,
            before: blob_ref(delta.old_file()),
            after: blob_ref(delta.new_file()),
        });
    }
    Ok(changes)
}

fn blob_ref(file: git2::DiffFile<'_>) -> Option<BlobRef> {
    if file.id().is_zero() {
        return None;
    }
    let path = file.path()?;
    Some(BlobRef {
        id: file.id(),
        path: path.display().to_string(),
    })
}

/// Timestamp of a signature, keeping the recorded UTC offset.
pub fn signature_time(sig: &Signature<'_>) -> DateTime<FixedOffset> {
    time_with_offset(sig.when().seconds(), sig.when().offset_minutes())
}

fn time_with_offset(seconds: i64, offset_minutes: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_keeps_offset() {
        let when = time_with_offset(1_700_000_000, 60);
        assert_eq!(when.timestamp(), 1_700_000_000);
        assert_eq!(when.offset().local_minus_utc(), 3600);
        assert_eq!(when.to_rfc3339(), "2023-11-14T23:13:20+01:00");
    }

    #[test]
    fn test_time_tolerates_bogus_offset() {
        // an offset beyond +/-24h falls back to UTC instead of panicking
        let when = time_with_offset(0, 100_000);
        assert_eq!(when.offset().local_minus_utc(), 0);
    }
}
