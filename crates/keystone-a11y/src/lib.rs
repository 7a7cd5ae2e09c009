//! Keystone Accessibility
//!
//! Focus and keyboard interaction engine for Keystone widgets.
//!
//! Features:
//! - Focus registry (eligible focus targets in a subtree)
//! - Focus trap for transient surfaces
//! - Focus return to the triggering control
//! - Roving navigation for composite widgets
//! - Live region announcements
//!
//! Controllers never own widget state. They take the host through the
//! [`FocusHost`] / [`LiveRegionHost`] capabilities, compute what should
//! happen next, and either apply it or hand back a decision.

pub mod aria;
pub mod config;
pub mod host;
pub mod keyboard;
pub mod registry;
pub mod trap;
pub mod focus_return;
pub mod roving;
pub mod live_region;
mod dom_host;

pub use keystone_dom::NodeId;

pub use aria::{AriaRole, Orientation, Politeness, SortDirection};
pub use config::A11yConfig;
pub use host::{FocusHost, FocusableElement, LiveRegionHost};
pub use keyboard::{Key, KeyDisposition, KeyEvent};
pub use registry::{first_focusable, focusable_in, last_focusable};
pub use trap::FocusTrap;
pub use focus_return::FocusReturn;
pub use roving::{
    ActivationMode, NavItem, Navigable, RovingConfig, RovingDecision, RovingKeyHandler,
    RovingNavigator, WrapPolicy,
};
pub use live_region::{
    announce, configure_announcer, reset_announcer, teardown_announcer, with_announcer,
    Announcement, AnnouncerConfig, LiveAnnouncer,
};

/// Focus and announcement failures
///
/// None of these are fatal: controllers log them and leave focus or the
/// announcement unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FocusError {
    #[error("focus target {0:?} is detached from the document")]
    Detached(NodeId),

    #[error("focus target {0:?} cannot receive focus")]
    NotFocusable(NodeId),

    #[error("no eligible focus target inside {0:?}")]
    EmptyCollection(NodeId),

    #[error("live region surface {0:?} is unavailable")]
    SurfaceUnavailable(NodeId),
}

impl FocusError {
    /// Attempted focus on a detached or non-focusable element
    pub fn is_target_unavailable(&self) -> bool {
        matches!(self, Self::Detached(_) | Self::NotFocusable(_))
    }
}
