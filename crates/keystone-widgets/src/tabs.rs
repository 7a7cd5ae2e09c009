//! Tabs
//!
//! `tablist` with roving tabindex. The focused tab is the only Tab stop;
//! arrows move between tabs through the roving navigator.

use keystone_a11y::{
    with_announcer, AriaRole, KeyDisposition, KeyEvent, Navigable, RovingConfig, RovingDecision, RovingNavigator,
};
use keystone_dom::{Document, NodeId};

use crate::{focus_quietly, WidgetError};

/// One tab and its panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self { id: id.to_string(), label: label.to_string(), disabled: false }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl Navigable for TabItem {
    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[derive(Debug)]
struct TabNodes {
    list: NodeId,
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
}

/// Tabs widget
#[derive(Debug)]
pub struct Tabs {
    items: Vec<TabItem>,
    selected: usize,
    focused: usize,
    navigator: RovingNavigator,
    nodes: Option<TabNodes>,
}

impl Tabs {
    pub fn new(items: Vec<TabItem>, initial: &str, config: RovingConfig) -> Result<Self, WidgetError> {
        if items.is_empty() {
            return Err(WidgetError::Empty);
        }
        let selected = items
            .iter()
            .position(|item| item.id == initial)
            .ok_or_else(|| WidgetError::UnknownItem(initial.to_string()))?;

        Ok(Self {
            items,
            selected,
            focused: selected,
            navigator: RovingNavigator::new(config),
            nodes: None,
        })
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn selected_id(&self) -> &str {
        &self.items[self.selected].id
    }

    /// Tab holding the roving focus (differs from the selection in manual mode)
    pub fn focused_id(&self) -> &str {
        &self.items[self.focused].id
    }

    pub fn tab_node(&self, id: &str) -> Option<NodeId> {
        let index = self.index_of(id)?;
        Some(self.nodes.as_ref()?.tabs[index])
    }

    pub fn panel_node(&self, id: &str) -> Option<NodeId> {
        let index = self.index_of(id)?;
        Some(self.nodes.as_ref()?.panels[index])
    }

    pub fn list_node(&self) -> Option<NodeId> {
        self.nodes.as_ref().map(|n| n.list)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Render the tab list and panels under `parent`
    pub fn mount(&mut self, doc: &mut Document, parent: NodeId) -> Result<NodeId, WidgetError> {
        let list = doc.append_element(parent, "div")?;
        let orientation = self.navigator.config().orientation;
        {
            let tree = doc.tree_mut();
            tree.set_attribute(list, "role", AriaRole::TabList.as_str())?;
            if let Some(value) = orientation.aria_value() {
                tree.set_attribute(list, "aria-orientation", value)?;
            }
        }

        let mut tabs = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let tab = doc.append_element(list, "button")?;
            let tree = doc.tree_mut();
            tree.set_attribute(tab, "id", format!("tab-{}", item.id))?;
            tree.set_attribute(tab, "role", AriaRole::Tab.as_str())?;
            tree.set_attribute(tab, "aria-controls", format!("panel-{}", item.id))?;
            tree.toggle_attribute(tab, "disabled", item.disabled)?;
            tree.set_text_content(tab, &item.label)?;
            tabs.push(tab);
        }

        let mut panels = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let panel = doc.append_element(parent, "div")?;
            let tree = doc.tree_mut();
            tree.set_attribute(panel, "id", format!("panel-{}", item.id))?;
            tree.set_attribute(panel, "role", AriaRole::TabPanel.as_str())?;
            tree.set_attribute(panel, "aria-labelledby", format!("tab-{}", item.id))?;
            tree.set_attribute(panel, "tabindex", "0")?;
            panels.push(panel);
        }

        self.nodes = Some(TabNodes { list, tabs, panels });
        self.sync(doc)?;
        Ok(list)
    }

    /// Reflect selection and roving tabindex into the DOM
    fn sync(&self, doc: &mut Document) -> Result<(), WidgetError> {
        let nodes = self.nodes.as_ref().ok_or(WidgetError::NotMounted)?;
        let tree = doc.tree_mut();
        for (index, (&tab, &panel)) in nodes.tabs.iter().zip(&nodes.panels).enumerate() {
            let selected = index == self.selected;
            tree.set_attribute(tab, "aria-selected", if selected { "true" } else { "false" })?;
            tree.set_attribute(tab, "tabindex", if index == self.focused { "0" } else { "-1" })?;
            tree.toggle_attribute(panel, "hidden", !selected)?;
        }
        Ok(())
    }

    /// Select a tab programmatically
    pub fn select(&mut self, doc: &mut Document, id: &str) -> Result<(), WidgetError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| WidgetError::UnknownItem(id.to_string()))?;
        self.selected = index;
        self.focused = index;
        if self.nodes.is_some() {
            self.sync(doc)?;
        }
        Ok(())
    }

    /// Remove the tab list and panels; the announcer clears per its configuration
    pub fn unmount(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if let Some(nodes) = self.nodes.take() {
            let tree = doc.tree_mut();
            tree.detach(nodes.list)?;
            for panel in nodes.panels {
                tree.detach(panel)?;
            }
        }
        with_announcer(|announcer| announcer.owner_unmounted(doc));
        Ok(())
    }

    /// Key handler for the tab list
    pub fn handle_key(&mut self, doc: &mut Document, event: &KeyEvent) -> KeyDisposition {
        let decision = self.navigator.decide(event, self.focused, &self.items);
        match decision {
            RovingDecision::Move { index, select } => {
                self.focused = index;
                if select {
                    self.selected = index;
                }
                self.apply(doc, true);
            }
            RovingDecision::Select { index } => {
                self.selected = index;
                self.apply(doc, false);
            }
            RovingDecision::Stay | RovingDecision::Ignored => {}
        }
        decision.disposition()
    }

    fn apply(&self, doc: &mut Document, move_focus: bool) {
        if let Err(err) = self.sync(doc) {
            tracing::warn!("tabs not synced: {}", err);
            return;
        }
        if move_focus {
            if let Some(nodes) = &self.nodes {
                focus_quietly(doc, nodes.tabs[self.focused]);
            }
        }
        tracing::debug!("tabs: focused {} selected {}", self.focused_id(), self.selected_id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_a11y::{ActivationMode, Key, Orientation, WrapPolicy};

    fn settings_tabs(config: RovingConfig) -> (Document, Tabs) {
        let mut doc = Document::default();
        let body = doc.body();
        let mut tabs = Tabs::new(
            vec![
                TabItem::new("general", "General"),
                TabItem::new("notifications", "Notifications"),
                TabItem::new("privacy", "Privacy"),
            ],
            "general",
            config,
        )
        .unwrap();
        tabs.mount(&mut doc, body).unwrap();
        (doc, tabs)
    }

    #[test]
    fn test_rejects_unknown_initial() {
        let err = Tabs::new(vec![TabItem::new("a", "A")], "b", RovingConfig::tab_list()).unwrap_err();
        assert!(matches!(err, WidgetError::UnknownItem(id) if id == "b"));
    }

    #[test]
    fn test_mount_renders_roving_tabindex() {
        let (doc, tabs) = settings_tabs(RovingConfig::tab_list());
        let tree = doc.tree();
        let general = tabs.tab_node("general").unwrap();
        let privacy = tabs.tab_node("privacy").unwrap();

        assert_eq!(tree.attribute(general, "tabindex"), Some("0"));
        assert_eq!(tree.attribute(privacy, "tabindex"), Some("-1"));
        assert_eq!(tree.attribute(general, "aria-selected"), Some("true"));
        assert_eq!(tree.attribute(tabs.list_node().unwrap(), "aria-orientation"), Some("horizontal"));
        assert!(tree.attribute(tabs.panel_node("privacy").unwrap(), "hidden").is_some());
        assert_eq!(doc.tab_sequence().first(), Some(&general));
    }

    #[test]
    fn test_manual_mode_selects_on_enter() {
        let config = RovingConfig::new(Orientation::Horizontal, WrapPolicy::Wrap, ActivationMode::Manual);
        let (mut doc, mut tabs) = settings_tabs(config);

        tabs.handle_key(&mut doc, &KeyEvent::new(Key::ArrowRight));
        assert_eq!(tabs.focused_id(), "notifications");
        assert_eq!(tabs.selected_id(), "general");
        assert_eq!(doc.active_element(), tabs.tab_node("notifications"));

        tabs.handle_key(&mut doc, &KeyEvent::new(Key::Enter));
        assert_eq!(tabs.selected_id(), "notifications");
    }

    #[test]
    fn test_wraps_backwards() {
        let (mut doc, mut tabs) = settings_tabs(RovingConfig::tab_list());
        let result = tabs.handle_key(&mut doc, &KeyEvent::new(Key::ArrowLeft));
        assert_eq!(result, KeyDisposition::Handled);
        assert_eq!(tabs.selected_id(), "privacy");
    }

    #[test]
    fn test_programmatic_select() {
        let (mut doc, mut tabs) = settings_tabs(RovingConfig::tab_list());
        tabs.select(&mut doc, "privacy").unwrap();
        let panel = tabs.panel_node("privacy").unwrap();
        assert!(doc.tree().attribute(panel, "hidden").is_none());
        assert!(tabs.select(&mut doc, "missing").is_err());
    }
}
