//! Host capabilities for `keystone_dom::Document`

use keystone_dom::{Document, DomError, NodeId};

use crate::{FocusError, FocusHost, FocusableElement, LiveRegionHost, Politeness};

/// Marker attribute identifying announcer surfaces
pub(crate) const SURFACE_MARKER: &str = "data-live-announcer";

/// Keeps the surface in the accessibility tree while painting nothing
const VISUALLY_HIDDEN: &str = "position:absolute;width:1px;height:1px;margin:-1px;padding:0;\
overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border:0";

impl FocusHost for Document {
    fn query_focusable(&self, container: NodeId) -> Vec<FocusableElement> {
        let connected = self.tree().is_connected(container);
        self.tree()
            .descendants(container)
            .filter(|&(id, _)| self.is_focus_candidate(id))
            .map(|(id, _)| FocusableElement {
                node: id,
                tab_reachable: self.is_tab_reachable(id),
                disabled: self.is_disabled(id),
                visible: connected && self.is_rendered(id),
            })
            .collect()
    }

    fn focus(&mut self, node: NodeId) -> Result<(), FocusError> {
        Document::focus(self, node).map_err(|err| match err {
            DomError::NotFound(id) | DomError::Detached(id) => FocusError::Detached(id),
            _ => FocusError::NotFocusable(node),
        })
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.tree().is_connected(node)
    }

    fn active_element(&self) -> Option<NodeId> {
        Document::active_element(self)
    }

    fn contains(&self, container: NodeId, node: NodeId) -> bool {
        self.tree().contains(container, node)
    }
}

impl LiveRegionHost for Document {
    fn mount_live_surface(&mut self, politeness: Politeness) -> Result<NodeId, FocusError> {
        let existing = self
            .tree()
            .descendants(self.tree().root())
            .find(|(_, node)| {
                node.as_element()
                    .and_then(|e| e.get_attr(SURFACE_MARKER))
                    .and_then(Politeness::parse)
                    == Some(politeness)
            })
            .map(|(id, _)| id);
        if let Some(id) = existing {
            return Ok(id);
        }

        let body = self.body();
        let surface = self
            .append_element(body, "div")
            .map_err(|_| FocusError::SurfaceUnavailable(body))?;
        let tree = self.tree_mut();
        let attrs = [
            (SURFACE_MARKER, politeness.as_str()),
            ("aria-live", politeness.as_str()),
            ("role", politeness.role().as_str()),
            ("aria-atomic", "true"),
            ("style", VISUALLY_HIDDEN),
        ];
        for (name, value) in attrs {
            tree.set_attribute(surface, name, value)
                .map_err(|_| FocusError::SurfaceUnavailable(surface))?;
        }

        tracing::debug!("mounted {} live region surface {:?}", politeness.as_str(), surface);
        Ok(surface)
    }

    fn surface_exists(&self, surface: NodeId) -> bool {
        self.tree().is_connected(surface) && self.tree().attribute(surface, SURFACE_MARKER).is_some()
    }

    fn surface_text(&self, surface: NodeId) -> Option<String> {
        self.surface_exists(surface)
            .then(|| self.tree().text_content(surface))
    }

    fn set_surface_text(&mut self, surface: NodeId, text: &str) -> Result<(), FocusError> {
        if !self.surface_exists(surface) {
            return Err(FocusError::SurfaceUnavailable(surface));
        }
        self.tree_mut()
            .set_text_content(surface, text)
            .map_err(|_| FocusError::SurfaceUnavailable(surface))
    }

    fn unmount_live_surface(&mut self, surface: NodeId) {
        if let Err(err) = self.tree_mut().detach(surface) {
            tracing::warn!("failed to unmount live region surface: {}", err);
        }
    }
}
