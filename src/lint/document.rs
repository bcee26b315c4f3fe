//! Parsed workflow document and node access.
//!
//! [`WorkflowDocument`] owns the parsed top-level mapping together with the
//! raw source text. Rules read it through [`Node`], a borrowed view where a
//! missing key is an explicit [`Node::Absent`] rather than an error, so
//! presence checks are plain matches.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::view::JobView;

/// Canonical key of the trigger-declaration section.
pub const TRIGGER_KEY: &str = "on";

/// Why a source could not become a [`WorkflowDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The source is not valid YAML.
    #[error("YAML syntax error: {0}")]
    Syntax(String),

    /// The source has no content.
    #[error("YAML file is empty")]
    Empty,

    /// The top-level node is not a mapping.
    #[error("Top-level YAML node must be a mapping, found {kind}")]
    NotAMapping { kind: &'static str },
}

/// A borrowed view of one node in the parsed tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Mapping(&'a Mapping),
    Sequence(&'a [Value]),
    /// Strings, numbers, booleans and explicit nulls.
    Scalar(&'a Value),
    /// The key was not there.
    Absent,
}

impl<'a> Node<'a> {
    /// Wrap a parsed value. Tags are looked through.
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Mapping(m) => Node::Mapping(m),
            Value::Sequence(s) => Node::Sequence(s.as_slice()),
            Value::Tagged(tagged) => Node::from_value(&tagged.value),
            other => Node::Scalar(other),
        }
    }

    /// Look up `key` in a mapping. Anything else yields [`Node::Absent`].
    pub fn get(self, key: &str) -> Node<'a> {
        match self {
            Node::Mapping(m) => m.get(key).map_or(Node::Absent, Node::from_value),
            _ => Node::Absent,
        }
    }

    /// Whether this is a mapping containing `key`.
    pub fn contains(self, key: &str) -> bool {
        !self.get(key).is_absent()
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Node::Absent)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Node::Scalar(Value::Null))
    }

    /// The string value of a string scalar.
    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Node::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    /// Elements of a sequence; empty for anything else.
    pub fn items(self) -> impl Iterator<Item = Node<'a>> {
        let slice: &'a [Value] = match self {
            Node::Sequence(s) => s,
            _ => &[],
        };
        slice.iter().map(Node::from_value)
    }

    /// Scalars as a one-element list, sequences element-wise, nothing otherwise.
    pub fn string_list(self) -> Vec<String> {
        match self {
            Node::Sequence(_) => self.items().map(Node::text).collect(),
            Node::Scalar(Value::Null) | Node::Absent | Node::Mapping(_) => Vec::new(),
            Node::Scalar(_) => vec![self.text()],
        }
    }

    /// Render the node as text for substring checks and messages.
    ///
    /// Absent and null render as the empty string.
    pub fn text(self) -> String {
        match self {
            Node::Absent => String::new(),
            Node::Scalar(value) => scalar_text(value),
            Node::Sequence(_) => {
                let parts: Vec<String> = self.items().map(Node::text).collect();
                format!("[{}]", parts.join(", "))
            }
            Node::Mapping(m) => {
                let parts: Vec<String> = m
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "{}: {}",
                            Node::from_value(k).text(),
                            Node::from_value(v).text()
                        )
                    })
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }

    /// Short name of the node type, used in messages.
    pub fn kind(self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(Value::Null) => "null",
            Node::Scalar(Value::Bool(_)) => "boolean",
            Node::Scalar(Value::Number(_)) => "number",
            Node::Scalar(_) => "string",
            Node::Absent => "absent",
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => Node::from_value(other).text(),
    }
}

/// A parsed and normalized workflow plus its raw source.
#[derive(Debug, Clone)]
pub struct WorkflowDocument {
    root: Mapping,
    source: String,
}

impl WorkflowDocument {
    /// Parse and normalize workflow source.
    ///
    /// Fails on invalid YAML, on empty content (including comment-only
    /// sources and an explicit `null`), and when the top level is not a
    /// mapping.
    pub fn parse(source: impl Into<String>) -> Result<Self, DocumentError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(DocumentError::Empty);
        }

        let value: Value =
            serde_yaml::from_str(&source).map_err(|e| DocumentError::Syntax(e.to_string()))?;

        let mut root = match value {
            Value::Mapping(m) => m,
            Value::Null => return Err(DocumentError::Empty),
            other => {
                return Err(DocumentError::NotAMapping {
                    kind: Node::from_value(&other).kind(),
                })
            }
        };

        normalize_trigger_key(&mut root);

        Ok(Self { root, source })
    }

    /// The top-level mapping.
    pub fn root(&self) -> Node<'_> {
        Node::Mapping(&self.root)
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Node<'_> {
        self.root().get(key)
    }

    /// Whether a top-level key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.root().contains(key)
    }

    /// The raw source text, exactly as read.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The `jobs` section.
    pub fn jobs(&self) -> Node<'_> {
        self.get("jobs")
    }

    /// A job by key, if declared (even with an empty body).
    pub fn job(&self, name: &str) -> Option<JobView<'_>> {
        let node = self.jobs().get(name);
        if node.is_absent() {
            None
        } else {
            Some(JobView::new(node))
        }
    }
}

/// Rename a boolean `true` top-level key to [`TRIGGER_KEY`].
///
/// YAML 1.1 style parsers read a bare `on:` as a boolean. Whatever produced
/// the boolean form, rules only ever address the section as `"on"`. When
/// both forms are present the boolean-keyed value wins.
fn normalize_trigger_key(root: &mut Mapping) {
    if let Some(section) = root.remove(&Value::Bool(true)) {
        tracing::debug!("normalized boolean trigger key to '{}'", TRIGGER_KEY);
        root.insert(Value::String(TRIGGER_KEY.to_string()), section);
    }
}
