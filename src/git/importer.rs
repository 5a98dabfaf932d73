/// History-to-graph mapping engine
///
/// Walks the full commit history once and deterministically emits, per
/// commit: the repository membership edge and the commit's
/// type/metadata/message facts, author and committer facts, one
/// parent/child edge pair per parent, one membership fact per file in
/// the commit's snapshot, and one change fact per tree-diff entry
/// against the first parent. Facts are handed to the sink in
/// per-logical-unit batches; the sink's write latency is the only
/// throttle, and the first error aborts the run without rollback.
use crate::error::{BatchError, ImportError, MapError};
use crate::git::walker::{self, BlobRef, ChangeEntry, ChangeKind};
use crate::identity;
use crate::quad::{Quad, Value};
use crate::sink::{BatchedSink, QuadWriter};
use crate::vocab;
use git2::{Commit, Repository, Signature};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Counters reported by an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// Commits fully mapped and handed to the sink.
    pub commits: usize,
    /// Quads persisted, including any partial batch before an abort.
    pub quads: usize,
}

/// Write a repository's history as quads into `writer`.
///
/// Convenience wrapper over [`Importer`]; callers that need partial
/// stats after an abort, or a cancellation flag, use [`Importer::open`]
/// directly.
pub fn import<W: QuadWriter>(writer: W, location: &Path) -> Result<ImportStats, ImportError> {
    Importer::open(writer, location)?.run()
}

/// One import run over one repository.
pub struct Importer<W: QuadWriter> {
    repo: Repository,
    mapper: Mapper<W>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<W: QuadWriter> Importer<W> {
    /// Open the repository at `location` and resolve its identity.
    ///
    /// Fails before any quad is written if the location is not a git
    /// repository.
    pub fn open(writer: W, location: &Path) -> Result<Self, ImportError> {
        let (repo, identity) = walker::open_repository(location)?;
        Ok(Self {
            repo,
            mapper: Mapper {
                repo_iri: Value::iri(identity),
                sink: BatchedSink::new(writer),
                stats: ImportStats::default(),
            },
            cancel: None,
        })
    }

    /// Install a cooperative cancellation flag, checked once per commit.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Counters so far; meaningful after a failed [`run`](Self::run)
    /// too, since already-written facts are not rolled back.
    pub fn stats(&self) -> &ImportStats {
        &self.mapper.stats
    }

    /// Walk the full history once, oldest-to-newest as the revwalk
    /// yields it, and emit every commit's quads.
    pub fn run(&mut self) -> Result<ImportStats, ImportError> {
        self.mapper.write(&[Quad::new(
            self.mapper.repo_iri.clone(),
            vocab::PRD_TYPE,
            Value::iri(vocab::TYPE_REPO),
        )])?;

        let walk = walker::history(&self.repo)?;
        for oid in walk {
            if let Some(flag) = &self.cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(ImportError::Cancelled);
                }
            }
            let oid = oid.map_err(|e| {
                crate::error::TraversalError::IterFailed(e.message().to_string())
            })?;
            let commit = self.repo.find_commit(oid).map_err(|e| {
                crate::error::TraversalError::CommitLookupFailed {
                    oid: oid.to_string(),
                    reason: e.message().to_string(),
                }
            })?;
            self.mapper.map_commit(&self.repo, &commit)?;
            self.mapper.stats.commits += 1;
            if self.mapper.stats.commits % 50 == 0 {
                tracing::debug!("Processed {} commits", self.mapper.stats.commits);
            }
        }

        self.mapper.sink.flush().map_err(|source| BatchError {
            written: 0,
            total: 0,
            source,
        })?;
        tracing::info!(
            "Imported {} commits ({} quads)",
            self.mapper.stats.commits,
            self.mapper.stats.quads
        );
        Ok(self.mapper.stats.clone())
    }
}

/// Translates one commit at a time into its fixed quad set.
struct Mapper<W: QuadWriter> {
    repo_iri: Value,
    sink: BatchedSink<W>,
    stats: ImportStats,
}

impl<W: QuadWriter> Mapper<W> {
    fn write(&mut self, quads: &[Quad]) -> Result<(), BatchError> {
        match self.sink.write_quads(quads) {
            Ok(n) => {
                self.stats.quads += n;
                Ok(())
            }
            Err(e) => {
                self.stats.quads += e.written;
                Err(e)
            }
        }
    }

    /// Emit the full quad set for one commit.
    fn map_commit(&mut self, repo: &Repository, commit: &Commit<'_>) -> Result<(), ImportError> {
        let commit_iri = identity::git_hash_iri(commit.id());
        let message = commit.message().unwrap_or("").to_string();

        self.write(&[
            Quad::new(self.repo_iri.clone(), vocab::PRD_COMMIT, commit_iri.clone()),
            Quad::new(
                commit_iri.clone(),
                vocab::PRD_TYPE,
                Value::iri(vocab::TYPE_COMMIT),
            ),
            Quad::new(
                commit_iri.clone(),
                vocab::PRD_METADATA,
                Value::literal(commit_header(commit)),
            ),
            Quad::new(
                commit_iri.clone(),
                vocab::PRD_MESSAGE,
                Value::literal(message),
            ),
        ])?;

        self.map_signature(&commit_iri, vocab::PRD_AUTHOR, &commit.author())?;
        self.map_signature(&commit_iri, vocab::PRD_COMMITTER, &commit.committer())?;

        // parent and child edges are always a matched pair
        for parent_id in commit.parent_ids() {
            let parent_iri = identity::git_hash_iri(parent_id);
            self.write(&[
                Quad::new(commit_iri.clone(), vocab::PRD_PARENT, parent_iri.clone()),
                Quad::new(parent_iri, vocab::PRD_CHILD, commit_iri.clone()),
            ])?;
        }

        for file in walker::list_files(commit)? {
            self.map_file(&commit_iri, &file)?;
        }

        for change in walker::diff_first_parent(repo, commit)? {
            self.map_change(&commit_iri, &change)?;
        }
        Ok(())
    }

    /// Emit the commit→person edge plus the person's identity facts.
    ///
    /// The person facts are re-emitted on every occurrence instead of
    /// being deduplicated; the destination treats identical facts as
    /// idempotent, which keeps this mapper stateless across commits.
    fn map_signature(
        &mut self,
        commit_iri: &Value,
        predicate: &'static str,
        sig: &Signature<'_>,
    ) -> Result<(), MapError> {
        let name = sig.name().unwrap_or("");
        let email = sig.email().unwrap_or("");
        let person = identity::person_node(name, email);

        self.write(&[
            Quad::new(commit_iri.clone(), predicate, person.clone())
                .with_label(Value::Time(walker::signature_time(sig))),
            Quad::new(person.clone(), vocab::PRD_TYPE, Value::iri(vocab::TYPE_AUTHOR)),
            Quad::new(person.clone(), vocab::PRD_NAME, Value::literal(name)),
            Quad::new(person, vocab::PRD_EMAIL, Value::iri(email)),
        ])
        .map_err(|source| MapError::Signature {
            commit: commit_iri.to_string(),
            source,
        })
    }

    /// Emit the commit→file membership fact, path on the edge label.
    fn map_file(&mut self, commit_iri: &Value, file: &BlobRef) -> Result<(), MapError> {
        let file_iri = identity::git_hash_iri(file.id);
        self.write(&[
            Quad::new(commit_iri.clone(), vocab::PRD_FILE, file_iri.clone())
                .with_label(Value::literal(file.path.clone())),
            Quad::new(file_iri, vocab::PRD_TYPE, Value::iri(vocab::TYPE_FILE)),
        ])
        .map_err(|source| MapError::File {
            commit: commit_iri.to_string(),
            source,
        })
    }

    /// Emit exactly one change fact for a tree-diff entry.
    ///
    /// Removals anchor on the blob that existed in the parent; adds and
    /// modifications anchor on the blob the commit introduces.
    fn map_change(&mut self, commit_iri: &Value, change: &ChangeEntry) -> Result<(), MapError> {
        let (predicate, anchor) = match change.kind {
            ChangeKind::Delete => (vocab::PRD_REMOVED, change.before.as_ref()),
            ChangeKind::Insert => (vocab::PRD_ADDED, change.after.as_ref()),
            ChangeKind::Modify => (vocab::PRD_MODIFIED, change.after.as_ref()),
        };
        let anchor = anchor.ok_or_else(|| MapError::MalformedChange {
            commit: commit_iri.to_string(),
            reason: format!("{:?} entry is missing its blob", change.kind),
        })?;

        self.write(&[Quad::new(
            identity::git_hash_iri(anchor.id),
            predicate,
            commit_iri.clone(),
        )
        .with_label(Value::literal(anchor.path.clone()))])
        .map_err(|source| MapError::Change {
            commit: commit_iri.to_string(),
            source,
        })
    }
}

/// Formatted header block stored as the commit's metadata fact:
/// hash, author line, date line, then the message indented.
fn commit_header(commit: &Commit<'_>) -> String {
    let author = commit.author();
    let when = walker::signature_time(&author);
    let mut header = format!(
        "commit {}\nAuthor: {} <{}>\nDate:   {}\n\n",
        commit.id(),
        author.name().unwrap_or(""),
        author.email().unwrap_or(""),
        when.format("%a %b %e %H:%M:%S %Y %z"),
    );
    for line in commit.message().unwrap_or("").lines() {
        header.push_str("    ");
        header.push_str(line);
        header.push('\n');
    }
    header
}
