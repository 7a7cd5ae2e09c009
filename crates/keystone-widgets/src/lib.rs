//! Keystone Widgets
//!
//! Tabs, DataTable, Modal and Toast. Each widget owns its selection state
//! and renders into a `keystone_dom::Document`; every focus and key
//! decision goes through the `keystone_a11y` controllers.

pub mod tabs;
pub mod data_table;
pub mod modal;
pub mod toast;

pub use tabs::{TabItem, Tabs};
pub use data_table::{Column, DataRow, DataTable};
pub use modal::{Modal, ModalOptions};
pub use toast::{Toast, ToastKind, ToastRegion};

use keystone_a11y::FocusHost;
use keystone_dom::{Document, DomError, NodeId};

/// Widget error
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("widget has no items")]
    Empty,

    #[error("unknown item id: {0}")]
    UnknownItem(String),

    #[error("widget is not mounted")]
    NotMounted,
}

/// Best-effort focus; failures are logged, never raised
pub(crate) fn focus_quietly(doc: &mut Document, node: NodeId) {
    if let Err(err) = FocusHost::focus(doc, node) {
        tracing::warn!("widget focus skipped: {}", err);
    }
}
