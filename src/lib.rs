//! # git-quads - Git History as a Quad Stream
//!
//! Exports the commit history of a git repository as a stream of
//! subject-predicate-object-label statements (quads) for ingestion into
//! a graph-oriented data store, making commits, authors, files, and
//! their relationships traversable as nodes and edges.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ History Walker │───▶│ Quad Mapper  │───▶│ Batched Sink │
//! │ (git2 revwalk) │    │ (per commit) │    │ (QuadWriter) │
//! └────────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The walk is single-pass and synchronous: one commit at a time, each
//! commit's quads fully handed to the sink before the next commit is
//! mapped. Node identities are content-derived (`sha1:<hex>` for
//! commits and blobs, a name+email digest for people), so re-running an
//! import over the same history reproduces an identical quad stream.
//!
//! ## Usage Example
//!
//! ```no_run
//! use git_quads::git::import;
//! use git_quads::sink::MemorySink;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut sink = MemorySink::new();
//!     let stats = import(&mut sink, Path::new("."))?;
//!     println!("{} commits, {} quads", stats.commits, stats.quads);
//!     Ok(())
//! }
//! ```

/// Configuration loading with TOML file and defaults
pub mod config;

/// Error types and utilities
pub mod error;

/// Git history walking and quad mapping
pub mod git;

/// Content-derived node identity helpers
pub mod identity;

/// Quad value model and N-Quads serialization
pub mod quad;

/// Quad destinations and the batched-write adapter
pub mod sink;

/// Fixed predicate and type vocabulary
pub mod vocab;
