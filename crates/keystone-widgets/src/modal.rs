//! Modal dialog
//!
//! Composes a focus trap with focus return. Opening unhides the dialog,
//! snapshots the trigger and traps Tab inside; closing releases the trap,
//! hides the dialog and puts focus back.

use keystone_a11y::{AriaRole, FocusReturn, FocusTrap, Key, KeyDisposition, KeyEvent};
use keystone_dom::{Document, NodeId};

use crate::WidgetError;

/// Modal behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOptions {
    pub close_on_escape: bool,
    /// Receives focus on close instead of the trigger
    pub return_target: Option<NodeId>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            return_target: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ModalNodes {
    dialog: NodeId,
    title: NodeId,
    content: NodeId,
}

/// Modal dialog widget
#[derive(Debug)]
pub struct Modal {
    id: String,
    title: String,
    options: ModalOptions,
    open: bool,
    trap: Option<FocusTrap>,
    focus_return: FocusReturn,
    nodes: Option<ModalNodes>,
}

impl Modal {
    pub fn new(id: &str, title: &str, options: ModalOptions) -> Self {
        let mut focus_return = FocusReturn::new();
        focus_return.set_return_target(options.return_target);
        Self {
            id: id.to_string(),
            title: title.to_string(),
            options,
            open: false,
            trap: None,
            focus_return,
            nodes: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dialog_node(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.dialog)
    }

    pub fn title_node(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.title)
    }

    /// Element the caller fills with the dialog body
    pub fn content(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.content)
    }

    pub fn mount(&mut self, doc: &mut Document, parent: NodeId) -> Result<NodeId, WidgetError> {
        let dialog = doc.append_element(parent, "div")?;
        let title = doc.append_element(dialog, "h2")?;
        let content = doc.append_element(dialog, "div")?;

        let title_id = format!("{}-title", self.id);
        let tree = doc.tree_mut();
        tree.set_attribute(dialog, "id", self.id.as_str())?;
        tree.set_attribute(dialog, "role", AriaRole::Dialog.as_str())?;
        tree.set_attribute(dialog, "aria-modal", "true")?;
        tree.set_attribute(dialog, "aria-labelledby", title_id.as_str())?;
        tree.set_attribute(dialog, "tabindex", "-1")?;
        tree.toggle_attribute(dialog, "hidden", true)?;
        tree.set_attribute(title, "id", title_id)?;
        tree.set_text_content(title, &self.title)?;

        self.trap = Some(FocusTrap::new(dialog));
        self.nodes = Some(ModalNodes { dialog, title, content });
        Ok(dialog)
    }

    pub fn open(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        let nodes = self.nodes.ok_or(WidgetError::NotMounted)?;
        if self.open {
            return Ok(());
        }
        doc.tree_mut().toggle_attribute(nodes.dialog, "hidden", false)?;
        self.open = true;

        self.focus_return.activate(&*doc);
        if let Some(trap) = self.trap.as_mut() {
            trap.activate(doc);
        }
        tracing::debug!("modal {} opened", self.id);
        Ok(())
    }

    pub fn close(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        let nodes = self.nodes.ok_or(WidgetError::NotMounted)?;
        if !self.open {
            return Ok(());
        }
        if let Some(trap) = self.trap.as_mut() {
            trap.deactivate();
        }
        doc.tree_mut().toggle_attribute(nodes.dialog, "hidden", true)?;
        self.open = false;

        self.focus_return.deactivate(doc);
        tracing::debug!("modal {} closed", self.id);
        Ok(())
    }

    /// Escape closes; Tab is handled by the trap
    pub fn handle_key(&mut self, doc: &mut Document, event: &KeyEvent) -> KeyDisposition {
        if !self.open {
            return KeyDisposition::PassThrough;
        }
        if event.key == Key::Escape && self.options.close_on_escape && !event.has_command_modifier() {
            return match self.close(doc) {
                Ok(()) => KeyDisposition::Handled,
                Err(err) => {
                    tracing::warn!("modal {} failed to close: {}", self.id, err);
                    KeyDisposition::PassThrough
                }
            };
        }
        match &self.trap {
            Some(trap) => trap.handle_key(doc, event),
            None => KeyDisposition::PassThrough,
        }
    }

    /// Close if open and remove the dialog from the document
    pub fn unmount(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.nodes.is_none() {
            return Ok(());
        }
        self.close(doc)?;
        if let Some(nodes) = self.nodes.take() {
            doc.tree_mut().detach(nodes.dialog)?;
        }
        self.trap = None;
        Ok(())
    }
}
