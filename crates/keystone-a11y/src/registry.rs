//! Focus Registry
//!
//! Pure queries over a subtree for elements that may take sequential focus.

use keystone_dom::NodeId;

use crate::FocusHost;

/// Eligible focus targets inside `container`, in document order
///
/// An empty result is a normal answer, not an error.
pub fn focusable_in<H: FocusHost + ?Sized>(host: &H, container: NodeId) -> Vec<NodeId> {
    host.query_focusable(container)
        .into_iter()
        .filter(|candidate| candidate.is_eligible())
        .map(|candidate| candidate.node)
        .collect()
}

pub fn first_focusable<H: FocusHost + ?Sized>(host: &H, container: NodeId) -> Option<NodeId> {
    host.query_focusable(container)
        .into_iter()
        .find(|candidate| candidate.is_eligible())
        .map(|candidate| candidate.node)
}

pub fn last_focusable<H: FocusHost + ?Sized>(host: &H, container: NodeId) -> Option<NodeId> {
    host.query_focusable(container)
        .into_iter()
        .rev()
        .find(|candidate| candidate.is_eligible())
        .map(|candidate| candidate.node)
}
