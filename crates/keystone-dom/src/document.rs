//! Document - High-level document API and focus semantics

use crate::{DomError, DomResult, DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding input focus
    focused: Option<NodeId>,
}

impl Document {
    /// Create a new document with an `<html><body>` skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let body = tree.create_element("body");
        let root = tree.root();
        let linked = tree
            .append_child(root, html)
            .and_then(|()| tree.append_child(html, body));
        debug_assert!(linked.is_ok(), "document skeleton failed to link");
        tree.take_mutations();

        Self {
            tree,
            html_element: html,
            body_element: body,
            focused: None,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Get element by `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(|e| e.get_attr("id")) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// No `hidden`/`inert` on the element or any ancestor
    pub fn is_rendered(&self, id: NodeId) -> bool {
        let mut current = id;
        while current.is_valid() {
            let Some(node) = self.tree.get(current) else {
                return false;
            };
            if node.as_element().is_some_and(|e| e.is_hidden()) {
                return false;
            }
            current = node.parent;
        }
        true
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.tree.element(id).is_some_and(|e| e.is_disabled())
    }

    /// Carries `tabindex` or is natively focusable; says nothing about state
    pub fn is_focus_candidate(&self, id: NodeId) -> bool {
        self.tree.element(id).is_some_and(|e| e.is_focus_candidate())
    }

    /// Part of sequential (Tab) navigation when focusable
    pub fn is_tab_reachable(&self, id: NodeId) -> bool {
        match self.tree.element(id) {
            Some(e) => match e.tab_index() {
                Some(index) => index >= 0,
                None => e.is_natively_focusable(),
            },
            None => false,
        }
    }

    /// Can receive focus right now
    pub fn is_focusable_area(&self, id: NodeId) -> bool {
        self.is_focus_candidate(id)
            && self.tree.is_connected(id)
            && self.is_rendered(id)
            && !self.is_disabled(id)
    }

    /// Move focus to `id`
    pub fn focus(&mut self, id: NodeId) -> DomResult<()> {
        if self.tree.get(id).is_none() {
            return Err(DomError::NotFound(id));
        }
        if !self.tree.is_connected(id) {
            return Err(DomError::Detached(id));
        }
        if !self.is_focusable_area(id) {
            return Err(DomError::NotFocusable(id));
        }
        if self.focused != Some(id) {
            tracing::trace!("focus moved {:?} -> {:?}", self.focused, id);
        }
        self.focused = Some(id);
        Ok(())
    }

    /// Drop focus back to the document
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Focused element, or `None` once it stopped being focusable
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused.filter(|&id| self.is_focusable_area(id))
    }

    /// Tab order: tab-reachable focusable areas in document order
    pub fn tab_sequence(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .map(|(id, _)| id)
            .filter(|&id| self.is_tab_reachable(id) && self.is_focusable_area(id))
            .collect()
    }

    /// Default action of Tab / Shift+Tab: move along the tab sequence, wrapping
    pub fn advance_focus(&mut self, backward: bool) -> Option<NodeId> {
        let sequence = self.tab_sequence();
        if sequence.is_empty() {
            return self.active_element();
        }

        let current = self.active_element();
        let position = current.and_then(|id| sequence.iter().position(|&s| s == id));
        let next = match (position, backward) {
            (Some(p), false) => sequence[(p + 1) % sequence.len()],
            (Some(p), true) => sequence[(p + sequence.len() - 1) % sequence.len()],
            // From outside the sequence, continue after the focused element in document order
            (None, false) => current
                .and_then(|c| sequence.iter().copied().find(|&s| self.follows(c, s)))
                .unwrap_or(sequence[0]),
            (None, true) => current
                .and_then(|c| sequence.iter().rev().copied().find(|&s| self.follows(s, c)))
                .unwrap_or(sequence[sequence.len() - 1]),
        };

        self.focused = Some(next);
        Some(next)
    }

    /// Whether `other` comes after `node` in document order
    fn follows(&self, node: NodeId, other: NodeId) -> bool {
        let mut seen = false;
        for (id, _) in self.tree.descendants(self.tree.root()) {
            if id == node {
                seen = true;
            } else if id == other {
                return seen;
            }
        }
        false
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::default();
        assert!(doc.tree().is_connected(doc.body()));
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.document_element()));
    }

    #[test]
    fn test_focus_rules() {
        let mut doc = Document::default();
        let body = doc.body();
        let button = doc.append_element(body, "button").unwrap();
        let div = doc.append_element(body, "div").unwrap();

        assert!(doc.focus(button).is_ok());
        assert_eq!(doc.active_element(), Some(button));
        assert_eq!(doc.focus(div), Err(DomError::NotFocusable(div)));

        doc.tree_mut().set_attribute(div, "tabindex", "-1").unwrap();
        assert!(doc.focus(div).is_ok());
        assert!(!doc.is_tab_reachable(div));
    }

    #[test]
    fn test_active_element_cleared_when_detached() {
        let mut doc = Document::default();
        let body = doc.body();
        let button = doc.append_element(body, "button").unwrap();
        doc.focus(button).unwrap();

        doc.tree_mut().detach(button).unwrap();
        assert_eq!(doc.active_element(), None);
        assert_eq!(doc.focus(button), Err(DomError::Detached(button)));
    }

    #[test]
    fn test_hidden_ancestor_blocks_focus() {
        let mut doc = Document::default();
        let body = doc.body();
        let section = doc.append_element(body, "section").unwrap();
        let button = doc.append_element(section, "button").unwrap();
        doc.tree_mut().toggle_attribute(section, "hidden", true).unwrap();

        assert!(!doc.is_rendered(button));
        assert_eq!(doc.focus(button), Err(DomError::NotFocusable(button)));
    }

    #[test]
    fn test_advance_focus_wraps() {
        let mut doc = Document::default();
        let body = doc.body();
        let a = doc.append_element(body, "button").unwrap();
        let b = doc.append_element(body, "button").unwrap();

        assert_eq!(doc.advance_focus(false), Some(a));
        assert_eq!(doc.advance_focus(false), Some(b));
        assert_eq!(doc.advance_focus(false), Some(a));
        assert_eq!(doc.advance_focus(true), Some(b));
    }
}
