//! Keystone DOM - Document Object Model
//!
//! Arena-backed element tree that hosts the focus engine.
//!
//! Features:
//! - Compact node arena with O(1) append
//! - Focus semantics (focusable areas, tab order, active element)
//! - Mutation log for observing attribute and text changes

mod node;
mod tree;
mod document;
mod dom_events;

pub use node::{Node, NodeData, ElementData, Attribute};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use dom_events::{MutationRecord, MutationType};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert the sentinel into `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} not found")]
    NotFound(NodeId),

    #[error("hierarchy request error")]
    HierarchyRequest,

    #[error("node {0:?} is not a child of the given parent")]
    NotAChild(NodeId),

    #[error("node {0:?} is not connected to the document")]
    Detached(NodeId),

    #[error("node {0:?} is not focusable")]
    NotFocusable(NodeId),
}
