// error.rs - Error types and internal-consistency reporting.
//
// Two families live here: `TreeError`, returned by the tree builder when the
// external parser hands us a malformed node stream, and `Inconsistency`,
// raised when a node's children contradict what its kind guarantees (a
// lexer/classifier mismatch, not a user error).
//
// How an inconsistency is surfaced is process-wide configuration held in
// atomics: panic loudly (default in debug builds) or report and let the
// caller fall back to its sentinel (default in release builds).

use std::fmt;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::regtree::NodeId;

/// Error returned by [`TreeBuilder::finish`](crate::regtree::TreeBuilder::finish).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// `finish_node` was called with no open node.
    UnbalancedFinish,
    /// `finish` was called while nodes were still open.
    UnclosedNodes(usize),
    /// No node was ever started.
    EmptyTree,
    /// The outermost node is not a `Pattern`.
    RootNotPattern,
    /// A token was pushed outside of any node.
    TokenAtRoot,
    /// A second top-level node was started after the root was closed.
    MultipleRoots,
    /// `start_node` was called with a token kind.
    TokenKindAsNode,
    /// More nodes than a [`NodeId`] can address.
    TooManyNodes,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnbalancedFinish => write!(f, "finish_node without matching start_node"),
            TreeError::UnclosedNodes(n) => write!(f, "{} node(s) left open at finish", n),
            TreeError::EmptyTree => write!(f, "empty tree"),
            TreeError::RootNotPattern => write!(f, "root node is not a pattern"),
            TreeError::TokenAtRoot => write!(f, "token outside of any node"),
            TreeError::MultipleRoots => write!(f, "more than one root node"),
            TreeError::TokenKindAsNode => write!(f, "token kind used as a composite node"),
            TreeError::TooManyNodes => write!(f, "node count exceeds the id range"),
        }
    }
}

impl std::error::Error for TreeError {}

/// What kind of precondition a node violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InconsistencyKind {
    /// A classifier received a spelling outside its closed mapping.
    UnknownSpelling,
    /// A node lacks a token its kind requires.
    MissingToken,
    /// The escape decoder was handed text without an escape marker.
    NotAnEscape,
    /// A query was issued against a node of the wrong kind.
    WrongNodeKind,
}

impl InconsistencyKind {
    fn as_str(self) -> &'static str {
        match self {
            InconsistencyKind::UnknownSpelling => "unknown spelling",
            InconsistencyKind::MissingToken => "missing token",
            InconsistencyKind::NotAnEscape => "not an escape sequence",
            InconsistencyKind::WrongNodeKind => "wrong node kind",
        }
    }
}

/// An internal-consistency violation: the upstream parser produced a tree
/// that breaks this crate's preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub node: Option<NodeId>,
    pub kind: InconsistencyKind,
    pub detail: String,
}

impl Inconsistency {
    pub fn new(kind: InconsistencyKind, detail: impl Into<String>) -> Self {
        Inconsistency {
            node: None,
            kind,
            detail: detail.into(),
        }
    }

    /// Attach the offending node.
    pub fn at(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(id) => write!(f, "{} at node {}: {}", self.kind.as_str(), id.index(), self.detail),
            None => write!(f, "{}: {}", self.kind.as_str(), self.detail),
        }
    }
}

impl std::error::Error for Inconsistency {}

// === Reporting policy ===

/// How [`report_inconsistency`] behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ConsistencyMode {
    /// Halt with a panic. The tree is not what the parser promised.
    Panic = 0,
    /// Count it, keep the last one, write it to stderr and carry on.
    Report = 1,
}

const DEFAULT_CONSISTENCY_MODE: u8 = if cfg!(debug_assertions) {
    ConsistencyMode::Panic as u8
} else {
    ConsistencyMode::Report as u8
};

static CONSISTENCY_MODE: AtomicU8 = AtomicU8::new(DEFAULT_CONSISTENCY_MODE);
static INCONSISTENCY_COUNT: AtomicUsize = AtomicUsize::new(0);
static LAST_INCONSISTENCY: Mutex<Option<Inconsistency>> = Mutex::new(None);

pub fn set_consistency_mode(mode: ConsistencyMode) {
    CONSISTENCY_MODE.store(mode as u8, Ordering::Relaxed);
}

pub fn consistency_mode() -> ConsistencyMode {
    match CONSISTENCY_MODE.load(Ordering::Relaxed) {
        0 => ConsistencyMode::Panic,
        _ => ConsistencyMode::Report,
    }
}

/// Number of inconsistencies reported since start (or the last reset).
pub fn inconsistency_count() -> usize {
    INCONSISTENCY_COUNT.load(Ordering::Relaxed)
}

/// The most recently reported inconsistency, if any.
pub fn last_inconsistency() -> Option<Inconsistency> {
    LAST_INCONSISTENCY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

pub fn reset_inconsistencies() {
    INCONSISTENCY_COUNT.store(0, Ordering::Relaxed);
    *LAST_INCONSISTENCY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
}

/// Surface an internal-consistency violation according to the current mode.
///
/// In `Report` mode this returns normally and the caller is expected to
/// hand back its Invalid/None sentinel.
pub fn report_inconsistency(inc: Inconsistency) {
    match consistency_mode() {
        ConsistencyMode::Panic => panic!("internal consistency violation: {}", inc),
        ConsistencyMode::Report => {
            INCONSISTENCY_COUNT.fetch_add(1, Ordering::Relaxed);
            eprintln!("regsema: internal consistency violation: {}", inc);
            *LAST_INCONSISTENCY
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(inc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_error_display() {
        assert_eq!(TreeError::UnclosedNodes(2).to_string(), "2 node(s) left open at finish");
        assert_eq!(TreeError::RootNotPattern.to_string(), "root node is not a pattern");
        assert_eq!(TreeError::TooManyNodes.to_string(), "node count exceeds the id range");
    }

    #[test]
    fn inconsistency_display_without_node() {
        let inc = Inconsistency::new(InconsistencyKind::NotAnEscape, "\"a\"");
        assert_eq!(inc.to_string(), "not an escape sequence: \"a\"");
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(TreeError::EmptyTree);
        assert_eq!(err.to_string(), "empty tree");
    }

    #[test]
    #[cfg(debug_assertions)]
    fn debug_builds_default_to_panic() {
        assert_eq!(consistency_mode(), ConsistencyMode::Panic);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "internal consistency violation")]
    fn panic_mode_halts() {
        report_inconsistency(Inconsistency::new(InconsistencyKind::MissingToken, "quantifier"));
    }
}
