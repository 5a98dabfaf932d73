/// Quad value model and N-Quads text serialization
///
/// A quad is a subject-predicate-object fact with an optional label.
/// Labels carry edge-local annotations: the file path on membership and
/// change edges, the signature timestamp on authorship edges.
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;

/// A single graph value: node identifier or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Externally meaningful node identifier (e.g. `sha1:<hex>`, a
    /// remote URL, or a vocabulary term).
    Iri(String),
    /// Blank node, identified only by an internal token.
    Bnode(String),
    /// String literal.
    Literal(String),
    /// Timestamp literal with its original UTC offset.
    Time(DateTime<FixedOffset>),
}

impl Value {
    /// IRI value from anything string-like.
    pub fn iri(s: impl Into<String>) -> Self {
        Value::Iri(s.into())
    }

    /// Blank-node value from an internal token.
    pub fn bnode(s: impl Into<String>) -> Self {
        Value::Bnode(s.into())
    }

    /// String literal value.
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Iri(s) => write!(f, "<{}>", s),
            Value::Bnode(s) => write!(f, "_:{}", s),
            Value::Literal(s) => write!(f, "\"{}\"", escape_literal(s)),
            Value::Time(t) => write!(
                f,
                "\"{}\"^^<http://www.w3.org/2001/XMLSchema#dateTime>",
                t.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        }
    }
}

/// One subject-predicate-object-label statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Value,
    pub predicate: Value,
    pub object: Value,
    pub label: Option<Value>,
}

impl Quad {
    /// Unlabeled quad; the predicate is a vocabulary term.
    pub fn new(subject: Value, predicate: &str, object: Value) -> Self {
        Self {
            subject,
            predicate: Value::iri(predicate),
            object,
            label: None,
        }
    }

    /// Attach an edge label (path or timestamp).
    pub fn with_label(mut self, label: Value) -> Self {
        self.label = Some(label);
        self
    }
}

impl fmt::Display for Quad {
    /// One N-Quads line, label in the graph position, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        write!(f, " .")
    }
}

/// Escape a string for inclusion in an N-Quads literal.
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
