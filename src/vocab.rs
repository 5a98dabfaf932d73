/// Fixed predicate and type vocabulary for the exported graph
///
/// These are process-wide constants shared with downstream consumers of
/// the quad stream. They are never user-configurable; changing any of
/// them breaks interoperability with existing graph data.

/// Predicate marking a node's type.
pub const PRD_TYPE: &str = "rdf:type";

/// Type marker for the repository node.
pub const TYPE_REPO: &str = "git:Repo";

/// Type marker for commit nodes.
pub const TYPE_COMMIT: &str = "git:Commit";

/// Type marker for person nodes (authors and committers share it).
pub const TYPE_AUTHOR: &str = "git:Author";

/// Type marker for file (blob) nodes.
pub const TYPE_FILE: &str = "git:File";

/// Repository → commit membership edge.
pub const PRD_COMMIT: &str = "git:commit";

/// Commit → person authorship edge, labeled with the author timestamp.
pub const PRD_AUTHOR: &str = "git:author";

/// Commit → person committer edge, labeled with the commit timestamp.
pub const PRD_COMMITTER: &str = "git:committer";

/// Commit → parent commit edge.
pub const PRD_PARENT: &str = "git:parent";

/// Parent commit → child commit edge (inverse of `PRD_PARENT`).
pub const PRD_CHILD: &str = "git:child";

/// Commit → file edge, labeled with the file's path in that commit.
pub const PRD_FILE: &str = "git:file";

/// File → commit edge for a file introduced by the commit.
pub const PRD_ADDED: &str = "git:added";

/// File → commit edge for a file deleted by the commit.
pub const PRD_REMOVED: &str = "git:removed";

/// File → commit edge for a file changed by the commit.
pub const PRD_MODIFIED: &str = "git:modified";

/// Commit → message literal.
pub const PRD_MESSAGE: &str = "git:message";

/// Commit → formatted header block literal (hash/author/date/message).
pub const PRD_METADATA: &str = "git:metadata";

/// Person → name literal.
pub const PRD_NAME: &str = "git:name";

/// Person → email IRI.
pub const PRD_EMAIL: &str = "git:email";
