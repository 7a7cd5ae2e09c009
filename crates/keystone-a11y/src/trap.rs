//! Focus Trap Controller
//!
//! Keeps Tab / Shift+Tab cycling inside a container while active.
//! Restoring focus on release is [`FocusReturn`](crate::FocusReturn)'s job,
//! so a trap can be reused outside modal contexts.

use keystone_dom::NodeId;

use crate::registry::focusable_in;
use crate::{FocusHost, Key, KeyDisposition, KeyEvent};

/// Inactive → Active → Inactive, re-entrant per activation
#[derive(Debug, Clone)]
pub struct FocusTrap {
    container: NodeId,
    active: bool,
}

impl FocusTrap {
    pub fn new(container: NodeId) -> Self {
        Self { container, active: false }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drive the trap from an `active` flag; only edges do anything
    pub fn set_active<H: FocusHost + ?Sized>(&mut self, host: &mut H, active: bool) {
        match (self.active, active) {
            (false, true) => self.activate(host),
            (true, false) => self.deactivate(),
            _ => {}
        }
    }

    /// Focus the first eligible element, or the container when there is none
    pub fn activate<H: FocusHost + ?Sized>(&mut self, host: &mut H) {
        self.active = true;
        let targets = focusable_in(&*host, self.container);
        tracing::debug!("focus trap on {:?} active ({} targets)", self.container, targets.len());

        let target = targets.first().copied().unwrap_or(self.container);
        self.move_focus(host, target);
    }

    /// Release key interception
    pub fn deactivate(&mut self) {
        if self.active {
            tracing::debug!("focus trap on {:?} released", self.container);
        }
        self.active = false;
    }

    /// Keep Tab and Shift+Tab cycling through the container's eligible elements
    pub fn handle_key<H: FocusHost + ?Sized>(&self, host: &mut H, event: &KeyEvent) -> KeyDisposition {
        if !self.active || event.key != Key::Tab || event.has_command_modifier() {
            return KeyDisposition::PassThrough;
        }

        let targets = focusable_in(&*host, self.container);
        let (Some(&first), Some(&last)) = (targets.first(), targets.last()) else {
            // Nothing to cycle through: hold focus on the container
            self.move_focus(host, self.container);
            return KeyDisposition::Handled;
        };

        let current = host
            .active_element()
            .filter(|&node| host.contains(self.container, node));

        let target = match current {
            // Focus escaped: pull it back in
            None => Some(if event.shift { last } else { first }),
            Some(node) if node == self.container => Some(if event.shift { last } else { first }),
            Some(node) => match targets.iter().position(|&t| t == node) {
                Some(0) if event.shift => Some(last),
                Some(at) if !event.shift && at == targets.len() - 1 => Some(first),
                Some(_) => None,
                // Inside but not a Tab stop: continue from its position
                None => Some(self.neighbour(&*host, node, event.shift).unwrap_or(
                    if event.shift { last } else { first },
                )),
            },
        };

        match target {
            Some(node) => {
                tracing::trace!("focus trap wraps to {:?}", node);
                self.move_focus(host, node);
                KeyDisposition::Handled
            }
            None => KeyDisposition::PassThrough,
        }
    }

    /// Nearest eligible element after (or before) `node` in document order
    fn neighbour<H: FocusHost + ?Sized>(&self, host: &H, node: NodeId, backward: bool) -> Option<NodeId> {
        let candidates = host.query_focusable(self.container);
        let at = candidates.iter().position(|c| c.node == node)?;
        let found = if backward {
            candidates[..at].iter().rev().find(|c| c.is_eligible())
        } else {
            candidates[at + 1..].iter().find(|c| c.is_eligible())
        };
        found.map(|c| c.node)
    }

    fn move_focus<H: FocusHost + ?Sized>(&self, host: &mut H, node: NodeId) {
        if let Err(err) = host.focus(node) {
            tracing::warn!("focus trap could not focus {:?}: {}", node, err);
        }
    }
}
