//! Toast notifications
//!
//! Visible toasts render in a region container; what assistive technology
//! hears goes through the shared live announcer. Errors and warnings are
//! assertive, everything else polite. Errors stay until dismissed.

use keystone_a11y::{announce, with_announcer, Politeness};
use keystone_dom::{Document, NodeId};

use crate::WidgetError;

pub const DEFAULT_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn politeness(&self) -> Politeness {
        match self {
            ToastKind::Warning | ToastKind::Error => Politeness::Assertive,
            ToastKind::Info | ToastKind::Success => Politeness::Polite,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    fn is_sticky(&self) -> bool {
        matches!(self, ToastKind::Error)
    }
}

/// A toast on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// `None` for sticky toasts
    pub expires_at: Option<u64>,
    node: NodeId,
}

impl Toast {
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// Toast region widget
#[derive(Debug)]
pub struct ToastRegion {
    duration_ms: u64,
    toasts: Vec<Toast>,
    next_id: u64,
    container: Option<NodeId>,
}

impl Default for ToastRegion {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

impl ToastRegion {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            toasts: Vec::new(),
            next_id: 1,
            container: None,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    pub fn mount(&mut self, doc: &mut Document, parent: NodeId) -> Result<NodeId, WidgetError> {
        let container = doc.append_element(parent, "section")?;
        doc.tree_mut().set_attribute(container, "aria-label", "Notifications")?;
        self.container = Some(container);
        Ok(container)
    }

    /// Render and announce a toast, returning its id
    pub fn show(
        &mut self,
        doc: &mut Document,
        message: &str,
        kind: ToastKind,
        now_ms: u64,
    ) -> Result<u64, WidgetError> {
        let container = self.container.ok_or(WidgetError::NotMounted)?;
        let node = doc.append_element(container, "div")?;
        {
            let tree = doc.tree_mut();
            tree.set_attribute(node, "data-kind", kind.as_str())?;
            tree.set_text_content(node, message)?;
        }

        let id = self.next_id;
        self.next_id += 1;
        let expires_at = (!kind.is_sticky()).then(|| now_ms.saturating_add(self.duration_ms));
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
            expires_at,
            node,
        });

        announce(doc, message, kind.politeness());
        tracing::debug!("toast {} shown ({})", id, kind.as_str());
        Ok(id)
    }

    /// Remove a toast; returns false when `id` is not showing
    pub fn dismiss(&mut self, doc: &mut Document, id: u64) -> bool {
        let Some(position) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        let toast = self.toasts.remove(position);
        Self::remove_node(doc, &toast);
        true
    }

    /// Drop every toast whose time has come; returns the removed ids
    pub fn expire(&mut self, doc: &mut Document, now_ms: u64) -> Vec<u64> {
        let (expired, kept): (Vec<Toast>, Vec<Toast>) = std::mem::take(&mut self.toasts)
            .into_iter()
            .partition(|t| t.expires_at.is_some_and(|at| at <= now_ms));
        self.toasts = kept;

        for toast in &expired {
            Self::remove_node(doc, toast);
        }
        expired.into_iter().map(|t| t.id).collect()
    }

    /// Remove the region; the announcer clears per its configuration
    pub fn unmount(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        self.toasts.clear();
        if let Some(container) = self.container.take() {
            doc.tree_mut().detach(container)?;
        }
        with_announcer(|announcer| announcer.owner_unmounted(doc));
        Ok(())
    }

    fn remove_node(doc: &mut Document, toast: &Toast) {
        if let Err(err) = doc.tree_mut().detach(toast.node) {
            tracing::warn!("toast {} node not removed: {}", toast.id, err);
        }
    }
}
