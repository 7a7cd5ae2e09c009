//! Edge case tests for keystone-dom
//!
//! Boundary conditions around tree surgery and focus semantics.

use keystone_dom::{Document, DomError, DomTree, MutationType, NodeId};

// ============================================================================
// TREE EDGE CASES
// ============================================================================

#[test]
fn test_empty_tree_has_only_document() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.descendants(tree.root()).count(), 0);
    assert!(tree.is_connected(tree.root()));
}

#[test]
fn test_unknown_node_operations() {
    let mut tree = DomTree::new();
    let root = tree.root();
    assert!(tree.get(NodeId::NONE).is_none());
    assert_eq!(tree.append_child(root, NodeId::NONE), Err(DomError::NotFound(NodeId::NONE)));
    assert!(!tree.is_connected(NodeId::NONE));
    assert!(tree.set_attribute(NodeId::NONE, "id", "x").is_err());
}

#[test]
fn test_append_moves_between_parents() {
    let mut tree = DomTree::new();
    let root = tree.root();
    let left = tree.create_element("div");
    let right = tree.create_element("div");
    let child = tree.create_element("span");
    tree.append_child(root, left).unwrap();
    tree.append_child(root, right).unwrap();
    tree.append_child(left, child).unwrap();

    tree.append_child(right, child).unwrap();
    assert_eq!(tree.children(left).count(), 0);
    assert_eq!(tree.parent(child), Some(right));
}

#[test]
fn test_remove_middle_child_keeps_siblings_linked() {
    let mut tree = DomTree::new();
    let root = tree.root();
    let list = tree.create_element("ul");
    tree.append_child(root, list).unwrap();
    let items: Vec<NodeId> = (0..3)
        .map(|_| {
            let li = tree.create_element("li");
            tree.append_child(list, li).unwrap();
            li
        })
        .collect();

    tree.remove_child(list, items[1]).unwrap();
    let remaining: Vec<NodeId> = tree.children(list).map(|(id, _)| id).collect();
    assert_eq!(remaining, vec![items[0], items[2]]);
}

#[test]
fn test_identical_text_still_mutates() {
    let mut tree = DomTree::new();
    let root = tree.root();
    let div = tree.create_element("div");
    tree.append_child(root, div).unwrap();
    tree.set_text_content(div, "Saved").unwrap();
    tree.take_mutations();

    tree.set_text_content(div, "Saved").unwrap();
    let records = tree.take_mutations();
    assert!(records.iter().any(|r| r.kind == MutationType::CharacterData));
}

#[test]
fn test_unchanged_attribute_is_not_recorded() {
    let mut tree = DomTree::new();
    let root = tree.root();
    let div = tree.create_element("div");
    tree.append_child(root, div).unwrap();
    tree.set_attribute(div, "role", "tab").unwrap();
    tree.take_mutations();

    tree.set_attribute(div, "role", "tab").unwrap();
    assert!(tree.mutations().is_empty());
}

// ============================================================================
// FOCUS EDGE CASES
// ============================================================================

#[test]
fn test_disabled_button_not_focusable() {
    let mut doc = Document::default();
    let body = doc.body();
    let button = doc.append_element(body, "button").unwrap();
    doc.tree_mut().toggle_attribute(button, "disabled", true).unwrap();
    assert_eq!(doc.focus(button), Err(DomError::NotFocusable(button)));
}

#[test]
fn test_tab_sequence_skips_negative_tabindex() {
    let mut doc = Document::default();
    let body = doc.body();
    let a = doc.append_element(body, "button").unwrap();
    let b = doc.append_element(body, "button").unwrap();
    let c = doc.append_element(body, "div").unwrap();
    doc.tree_mut().set_attribute(b, "tabindex", "-1").unwrap();
    doc.tree_mut().set_attribute(c, "tabindex", "0").unwrap();

    assert_eq!(doc.tab_sequence(), vec![a, c]);
}

#[test]
fn test_advance_from_container_enters_it() {
    let mut doc = Document::default();
    let body = doc.body();
    let before = doc.append_element(body, "button").unwrap();
    let dialog = doc.append_element(body, "div").unwrap();
    doc.tree_mut().set_attribute(dialog, "tabindex", "-1").unwrap();
    let inside = doc.append_element(dialog, "button").unwrap();

    doc.focus(dialog).unwrap();
    assert_eq!(doc.advance_focus(false), Some(inside));

    doc.focus(dialog).unwrap();
    assert_eq!(doc.advance_focus(true), Some(before));
}

#[test]
fn test_advance_with_no_tab_stops() {
    let mut doc = Document::default();
    assert_eq!(doc.advance_focus(false), None);
}

#[test]
fn test_get_element_by_id() {
    let mut doc = Document::default();
    let body = doc.body();
    let div = doc.append_element(body, "div").unwrap();
    doc.tree_mut().set_attribute(div, "id", "main").unwrap();
    assert_eq!(doc.get_element_by_id("main"), Some(div));
    assert_eq!(doc.get_element_by_id("missing"), None);
}
