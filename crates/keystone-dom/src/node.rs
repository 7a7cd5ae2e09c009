//! DOM Node
//!
//! Nodes link to each other through `NodeId` indices instead of pointers,
//! so the whole tree lives in one `Vec` and handles stay `Copy`.

use crate::NodeId;

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes in insertion order
    pub attrs: Vec<Attribute>,
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Tags that take focus without a `tabindex` attribute
const NATIVE_FOCUSABLE: &[&str] = &["button", "input", "select", "textarea", "summary"];

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, returning the previous value
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name == name) {
            return Some(std::mem::replace(&mut attr.value, value));
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value,
        });
        None
    }

    /// Remove an attribute, returning its value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(pos).value)
    }

    /// Parsed `tabindex`; unparsable values count as absent
    pub fn tab_index(&self) -> Option<i32> {
        self.get_attr("tabindex")?.trim().parse().ok()
    }

    /// Focusable without an explicit `tabindex`
    pub fn is_natively_focusable(&self) -> bool {
        match self.tag.as_str() {
            "a" | "area" => self.has_attr("href"),
            "input" => self.get_attr("type") != Some("hidden"),
            tag => NATIVE_FOCUSABLE.contains(&tag),
        }
    }

    /// Carries `tabindex` or is natively focusable
    pub fn is_focus_candidate(&self) -> bool {
        self.tab_index().is_some() || self.is_natively_focusable()
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attr("disabled")
    }

    /// Hidden from rendering by this element alone
    pub fn is_hidden(&self) -> bool {
        self.has_attr("hidden") || self.has_attr("inert")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_returns_previous() {
        let mut el = ElementData::new("DIV");
        assert_eq!(el.tag, "div");
        assert_eq!(el.set_attr("id", "a"), None);
        assert_eq!(el.set_attr("id", "b"), Some("a".to_string()));
        assert_eq!(el.get_attr("id"), Some("b"));
        assert_eq!(el.remove_attr("id"), Some("b".to_string()));
        assert!(!el.has_attr("id"));
    }

    #[test]
    fn test_native_focusability() {
        let mut link = ElementData::new("a");
        assert!(!link.is_natively_focusable());
        link.set_attr("href", "#");
        assert!(link.is_natively_focusable());

        let mut input = ElementData::new("input");
        assert!(input.is_natively_focusable());
        input.set_attr("type", "hidden");
        assert!(!input.is_natively_focusable());

        assert!(ElementData::new("button").is_focus_candidate());
        assert!(!ElementData::new("div").is_focus_candidate());
    }

    #[test]
    fn test_tab_index_parse() {
        let mut el = ElementData::new("div");
        assert_eq!(el.tab_index(), None);
        el.set_attr("tabindex", "-1");
        assert_eq!(el.tab_index(), Some(-1));
        el.set_attr("tabindex", "abc");
        assert_eq!(el.tab_index(), None);
    }
}
