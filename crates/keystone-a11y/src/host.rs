//! Host Capabilities
//!
//! The small surface the controllers need from whatever tree they run
//! against: query focus candidates, move focus, and mount a hidden text
//! surface for announcements. `keystone_dom::Document` implements both
//! traits; tests can swap in anything else.

use keystone_dom::NodeId;

use crate::{FocusError, Politeness};

/// A focus candidate as seen by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusableElement {
    pub node: NodeId,
    /// Part of sequential (Tab) navigation
    pub tab_reachable: bool,
    pub disabled: bool,
    pub visible: bool,
}

impl FocusableElement {
    /// eligible ⇔ visible ∧ ¬disabled ∧ tab reachable
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.visible && !self.disabled && self.tab_reachable
    }
}

/// Tree query and focus capability
pub trait FocusHost {
    /// Every focus candidate strictly inside `container`, in document order,
    /// whether or not it is currently eligible
    fn query_focusable(&self, container: NodeId) -> Vec<FocusableElement>;

    /// Move input focus to `node`
    fn focus(&mut self, node: NodeId) -> Result<(), FocusError>;

    /// Attached to the live tree
    fn is_connected(&self, node: NodeId) -> bool;

    /// Element currently holding focus
    fn active_element(&self) -> Option<NodeId>;

    /// `node` is `container` or one of its descendants
    fn contains(&self, container: NodeId, node: NodeId) -> bool;
}

/// Visually hidden, non-interactive text surface for assistive technology
pub trait LiveRegionHost {
    /// Mount (or find) the surface for `politeness`
    fn mount_live_surface(&mut self, politeness: Politeness) -> Result<NodeId, FocusError>;

    /// Surface is still mounted
    fn surface_exists(&self, surface: NodeId) -> bool;

    fn surface_text(&self, surface: NodeId) -> Option<String>;

    fn set_surface_text(&mut self, surface: NodeId, text: &str) -> Result<(), FocusError>;

    fn unmount_live_surface(&mut self, surface: NodeId);
}
