//! DOM Mutation Records
//!
//! Attribute, character data and child list changes, in the order they
//! were applied.

use crate::NodeId;

/// Mutation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    Attributes,
    CharacterData,
    ChildList,
}

/// Mutation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub kind: MutationType,
    pub target: NodeId,
    pub attribute_name: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl MutationRecord {
    /// Attribute set or removed on `target`
    pub fn attribute(target: NodeId, name: &str, old_value: Option<String>, new_value: Option<String>) -> Self {
        Self {
            kind: MutationType::Attributes,
            target,
            attribute_name: Some(name.to_string()),
            old_value,
            new_value,
        }
    }

    /// Text content of `target` replaced
    pub fn character_data(target: NodeId, old_value: String, new_value: String) -> Self {
        Self {
            kind: MutationType::CharacterData,
            target,
            attribute_name: None,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// Children of `target` added or removed
    pub fn child_list(target: NodeId) -> Self {
        Self {
            kind: MutationType::ChildList,
            target,
            attribute_name: None,
            old_value: None,
            new_value: None,
        }
    }

    pub fn is_character_data(&self) -> bool {
        self.kind == MutationType::CharacterData
    }
}
