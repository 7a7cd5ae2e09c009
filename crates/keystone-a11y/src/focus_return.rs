//! Focus Return Controller
//!
//! Remembers what held focus before a transient surface opened and puts
//! focus back there when it closes.

use keystone_dom::NodeId;

use crate::{FocusError, FocusHost};

/// Snapshot-and-restore for one open/close cycle at a time
#[derive(Debug, Clone, Default)]
pub struct FocusReturn {
    active: bool,
    snapshot: Option<NodeId>,
    return_target: Option<NodeId>,
}

impl FocusReturn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore to `target` instead of the captured element
    pub fn with_return_target(mut self, target: NodeId) -> Self {
        self.return_target = Some(target);
        self
    }

    pub fn set_return_target(&mut self, target: Option<NodeId>) {
        self.return_target = target;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Element captured at the last activation, until restored
    pub fn snapshot(&self) -> Option<NodeId> {
        self.snapshot
    }

    /// Drive from an `active` flag; false→true captures, true→false restores
    pub fn set_active<H: FocusHost + ?Sized>(&mut self, host: &mut H, active: bool) {
        if active {
            self.activate(&*host);
        } else {
            self.deactivate(host);
        }
    }

    /// Capture the focused element unless a snapshot is already held
    pub fn activate<H: FocusHost + ?Sized>(&mut self, host: &H) {
        self.active = true;
        if self.snapshot.is_some() {
            return;
        }
        self.snapshot = host.active_element();
        tracing::debug!("focus snapshot captured: {:?}", self.snapshot);
    }

    /// Restore focus and clear the snapshot; no-op when not active
    pub fn deactivate<H: FocusHost + ?Sized>(&mut self, host: &mut H) {
        if !self.active {
            return;
        }
        self.active = false;
        let snapshot = self.snapshot.take();

        let restored = match (self.return_target, snapshot) {
            (Some(target), fallback) => Self::try_focus(host, target).or_else(|err| {
                tracing::warn!("focus return target unavailable: {}", err);
                match fallback {
                    Some(node) if node != target && err.is_target_unavailable() => Self::try_focus(host, node),
                    _ => Err(err),
                }
            }),
            (None, Some(node)) => Self::try_focus(host, node),
            (None, None) => return,
        };

        match restored {
            Ok(node) => tracing::debug!("focus restored to {:?}", node),
            Err(err) => tracing::warn!("focus not restored: {}", err),
        }
    }

    fn try_focus<H: FocusHost + ?Sized>(host: &mut H, node: NodeId) -> Result<NodeId, FocusError> {
        if !host.is_connected(node) {
            return Err(FocusError::Detached(node));
        }
        host.focus(node).map(|_| node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_dom::Document;

    fn page() -> (Document, NodeId, NodeId) {
        let mut doc = Document::default();
        let body = doc.body();
        let trigger = doc.append_element(body, "button").unwrap();
        let inside = doc.append_element(body, "button").unwrap();
        (doc, trigger, inside)
    }

    #[test]
    fn test_restores_previous_focus() {
        let (mut doc, trigger, inside) = page();
        doc.focus(trigger).unwrap();

        let mut ret = FocusReturn::new();
        ret.set_active(&mut doc, true);
        doc.focus(inside).unwrap();
        ret.set_active(&mut doc, false);

        assert_eq!(doc.active_element(), Some(trigger));
        assert_eq!(ret.snapshot(), None);
    }

    #[test]
    fn test_repeated_activation_keeps_first_capture() {
        let (mut doc, trigger, inside) = page();
        doc.focus(trigger).unwrap();

        let mut ret = FocusReturn::new();
        ret.activate(&doc);
        doc.focus(inside).unwrap();
        ret.activate(&doc);
        assert_eq!(ret.snapshot(), Some(trigger));
    }

    #[test]
    fn test_second_deactivation_is_noop() {
        let (mut doc, trigger, inside) = page();
        doc.focus(trigger).unwrap();

        let mut ret = FocusReturn::new();
        ret.set_active(&mut doc, true);
        ret.set_active(&mut doc, false);
        doc.focus(inside).unwrap();
        ret.set_active(&mut doc, false);
        assert_eq!(doc.active_element(), Some(inside));
    }

    #[test]
    fn test_explicit_target_wins() {
        let (mut doc, trigger, inside) = page();
        doc.focus(trigger).unwrap();

        let mut ret = FocusReturn::new().with_return_target(inside);
        ret.set_active(&mut doc, true);
        ret.set_active(&mut doc, false);
        assert_eq!(doc.active_element(), Some(inside));
    }

    #[test]
    fn test_detached_snapshot_fails_silently() {
        let (mut doc, trigger, inside) = page();
        doc.focus(trigger).unwrap();

        let mut ret = FocusReturn::new();
        ret.set_active(&mut doc, true);
        doc.focus(inside).unwrap();
        doc.tree_mut().detach(trigger).unwrap();
        ret.set_active(&mut doc, false);

        assert_eq!(doc.active_element(), Some(inside));
        assert_eq!(ret.snapshot(), None);
    }
}
