//! Live Announcer
//!
//! Announces short messages to assistive technology through one persistent,
//! visually hidden surface per politeness level.
//!
//! Screen readers only speak when they observe a mutation, so writing the
//! same text twice can be swallowed. With `force_reannounce` on, an
//! identical message first clears the surface and then writes the text.
//!
//! The UI thread owns one announcer, reached through [`with_announcer`].
//! It is created lazily on first use; [`teardown_announcer`] unmounts its
//! surfaces and [`reset_announcer`] drops its state (tests call this
//! between cases). Last write wins: callers never own a surface.

use std::cell::RefCell;

use keystone_dom::NodeId;
use serde::Deserialize;

use crate::{FocusError, LiveRegionHost, Politeness};

/// Announcer behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnnouncerConfig {
    /// Clear surfaces when the owning widget unmounts
    pub clear_on_unmount: bool,
    /// Clear before writing text identical to what the surface holds
    pub force_reannounce: bool,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            clear_on_unmount: true,
            force_reannounce: true,
        }
    }
}

/// A message and its urgency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

#[derive(Debug, Default)]
struct Slot {
    surface: Option<NodeId>,
    last: Option<Announcement>,
}

/// Per-politeness live region writer
#[derive(Debug, Default)]
pub struct LiveAnnouncer {
    config: AnnouncerConfig,
    polite: Slot,
    assertive: Slot,
}

impl LiveAnnouncer {
    pub fn new(config: AnnouncerConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn config(&self) -> AnnouncerConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AnnouncerConfig) {
        self.config = config;
    }

    fn slot(&self, politeness: Politeness) -> &Slot {
        match politeness {
            Politeness::Polite => &self.polite,
            Politeness::Assertive => &self.assertive,
        }
    }

    fn slot_mut(&mut self, politeness: Politeness) -> &mut Slot {
        match politeness {
            Politeness::Polite => &mut self.polite,
            Politeness::Assertive => &mut self.assertive,
        }
    }

    /// Surface currently used for `politeness`, if mounted
    pub fn surface(&self, politeness: Politeness) -> Option<NodeId> {
        self.slot(politeness).surface
    }

    /// Most recent announcement at `politeness`
    pub fn last(&self, politeness: Politeness) -> Option<&Announcement> {
        self.slot(politeness).last.as_ref()
    }

    /// Write `text` to the `politeness` surface; failures are logged
    pub fn announce<H: LiveRegionHost + ?Sized>(&mut self, host: &mut H, text: &str, politeness: Politeness) {
        if let Err(err) = self.try_announce(host, text, politeness) {
            tracing::warn!("announcement dropped: {}", err);
        }
    }

    pub fn try_announce<H: LiveRegionHost + ?Sized>(
        &mut self,
        host: &mut H,
        text: &str,
        politeness: Politeness,
    ) -> Result<(), FocusError> {
        let surface = self.ensure_surface(host, politeness)?;

        if self.config.force_reannounce && host.surface_text(surface).as_deref() == Some(text) {
            host.set_surface_text(surface, "")?;
        }
        host.set_surface_text(surface, text)?;

        tracing::debug!("announce ({}): {}", politeness.as_str(), text);
        self.slot_mut(politeness).last = Some(Announcement {
            text: text.to_string(),
            politeness,
        });
        Ok(())
    }

    /// Mount the surface on first use, or again if the host lost it
    fn ensure_surface<H: LiveRegionHost + ?Sized>(
        &mut self,
        host: &mut H,
        politeness: Politeness,
    ) -> Result<NodeId, FocusError> {
        if let Some(surface) = self.slot(politeness).surface {
            if host.surface_exists(surface) {
                return Ok(surface);
            }
            tracing::warn!("{} live region surface lost, remounting", politeness.as_str());
        }
        let surface = host.mount_live_surface(politeness)?;
        self.slot_mut(politeness).surface = Some(surface);
        Ok(surface)
    }

    /// Empty one surface
    pub fn clear<H: LiveRegionHost + ?Sized>(&mut self, host: &mut H, politeness: Politeness) {
        let Some(surface) = self.slot(politeness).surface else {
            return;
        };
        if let Err(err) = host.set_surface_text(surface, "") {
            tracing::warn!("failed to clear live region: {}", err);
        }
    }

    /// The owning widget went away; clear unless configured otherwise
    pub fn owner_unmounted<H: LiveRegionHost + ?Sized>(&mut self, host: &mut H) {
        if !self.config.clear_on_unmount {
            return;
        }
        for politeness in Politeness::ALL {
            self.clear(host, politeness);
        }
    }

    /// Unmount both surfaces and forget all state
    pub fn teardown<H: LiveRegionHost + ?Sized>(&mut self, host: &mut H) {
        for politeness in Politeness::ALL {
            if let Some(surface) = self.slot_mut(politeness).surface.take() {
                host.unmount_live_surface(surface);
            }
        }
        *self = Self::new(self.config);
    }
}

thread_local! {
    static ANNOUNCER: RefCell<LiveAnnouncer> = RefCell::new(LiveAnnouncer::default());
}

/// Run `f` against the UI thread's announcer
///
/// Not re-entrant: `f` must not call back into the accessor.
pub fn with_announcer<R>(f: impl FnOnce(&mut LiveAnnouncer) -> R) -> R {
    ANNOUNCER.with(|announcer| f(&mut announcer.borrow_mut()))
}

/// Announce through the shared announcer
pub fn announce<H: LiveRegionHost + ?Sized>(host: &mut H, text: &str, politeness: Politeness) {
    with_announcer(|announcer| announcer.announce(host, text, politeness));
}

pub fn configure_announcer(config: AnnouncerConfig) {
    with_announcer(|announcer| announcer.set_config(config));
}

/// Unmount the shared announcer's surfaces and reset it
pub fn teardown_announcer<H: LiveRegionHost + ?Sized>(host: &mut H) {
    with_announcer(|announcer| announcer.teardown(host));
}

/// Drop the shared announcer's state without touching any host
pub fn reset_announcer() {
    with_announcer(|announcer| *announcer = LiveAnnouncer::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_dom::{Document, MutationType};

    #[test]
    fn test_lazy_single_surface_per_politeness() {
        let mut doc = Document::default();
        let mut announcer = LiveAnnouncer::default();
        assert_eq!(announcer.surface(Politeness::Polite), None);

        announcer.announce(&mut doc, "one", Politeness::Polite);
        let surface = announcer.surface(Politeness::Polite).unwrap();
        announcer.announce(&mut doc, "two", Politeness::Polite);
        assert_eq!(announcer.surface(Politeness::Polite), Some(surface));
        assert_eq!(doc.surface_text(surface).as_deref(), Some("two"));
        assert_eq!(announcer.surface(Politeness::Assertive), None);
    }

    #[test]
    fn test_duplicate_text_forces_mutation() {
        let mut doc = Document::default();
        let mut announcer = LiveAnnouncer::default();
        announcer.announce(&mut doc, "Saved", Politeness::Polite);
        doc.tree_mut().take_mutations();

        announcer.announce(&mut doc, "Saved", Politeness::Polite);
        let values: Vec<String> = doc
            .tree_mut()
            .take_mutations()
            .into_iter()
            .filter(|r| r.kind == MutationType::CharacterData)
            .filter_map(|r| r.new_value)
            .collect();
        assert_eq!(values, vec!["".to_string(), "Saved".to_string()]);
    }

    #[test]
    fn test_unmount_clears_by_default() {
        let mut doc = Document::default();
        let mut announcer = LiveAnnouncer::default();
        announcer.announce(&mut doc, "Loaded", Politeness::Assertive);
        announcer.owner_unmounted(&mut doc);
        let surface = announcer.surface(Politeness::Assertive).unwrap();
        assert_eq!(doc.surface_text(surface).as_deref(), Some(""));
    }

    #[test]
    fn test_unmount_can_keep_text() {
        let mut doc = Document::default();
        let mut announcer = LiveAnnouncer::new(AnnouncerConfig {
            clear_on_unmount: false,
            ..Default::default()
        });
        announcer.announce(&mut doc, "Loaded", Politeness::Polite);
        announcer.owner_unmounted(&mut doc);
        let surface = announcer.surface(Politeness::Polite).unwrap();
        assert_eq!(doc.surface_text(surface).as_deref(), Some("Loaded"));
    }

    #[test]
    fn test_lost_surface_is_remounted() {
        let mut doc = Document::default();
        let mut announcer = LiveAnnouncer::default();
        announcer.announce(&mut doc, "a", Politeness::Polite);
        let first = announcer.surface(Politeness::Polite).unwrap();
        doc.tree_mut().detach(first).unwrap();

        announcer.announce(&mut doc, "b", Politeness::Polite);
        let second = announcer.surface(Politeness::Polite).unwrap();
        assert_ne!(first, second);
        assert_eq!(doc.surface_text(second).as_deref(), Some("b"));
    }

    #[test]
    fn test_global_accessor_reset() {
        reset_announcer();
        let mut doc = Document::default();
        announce(&mut doc, "Hello", Politeness::Polite);
        let last = with_announcer(|a| a.last(Politeness::Polite).cloned());
        assert_eq!(last.map(|a| a.text), Some("Hello".to_string()));

        teardown_announcer(&mut doc);
        assert_eq!(with_announcer(|a| a.surface(Politeness::Polite)), None);
        assert!(doc.tree().descendants(doc.body()).next().is_none());
    }
}
