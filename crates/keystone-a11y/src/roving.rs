//! Roving Navigation Controller
//!
//! Maps arrow/Home/End input to a new active index over an ordered,
//! possibly sparse collection. Tab lists and data grid rows/columns run
//! the same algorithm; only orientation and wrap policy differ.
//!
//! The controller never touches widget state. It answers with a
//! [`RovingDecision`] and the widget applies it.

use serde::Deserialize;

use crate::{Key, KeyDisposition, KeyEvent, Orientation};

/// What happens at either end of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Step past the end to the start and vice versa (tab lists)
    #[default]
    Wrap,
    /// Stop at the boundary (table rows)
    Clamp,
}

/// When a move also selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// Moving focus selects immediately
    #[default]
    Automatic,
    /// Moving focus only; Enter/Space selects
    Manual,
}

/// Navigator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RovingConfig {
    pub orientation: Orientation,
    pub wrap: WrapPolicy,
    pub activation: ActivationMode,
}

impl RovingConfig {
    pub fn new(orientation: Orientation, wrap: WrapPolicy, activation: ActivationMode) -> Self {
        Self { orientation, wrap, activation }
    }

    /// Horizontal, wrapping, automatic
    pub fn tab_list() -> Self {
        Self::new(Orientation::Horizontal, WrapPolicy::Wrap, ActivationMode::Automatic)
    }

    /// Vertical, clamping, manual
    pub fn table_rows() -> Self {
        Self::new(Orientation::Vertical, WrapPolicy::Clamp, ActivationMode::Manual)
    }

    /// Horizontal, clamping, manual
    pub fn table_columns() -> Self {
        Self::new(Orientation::Horizontal, WrapPolicy::Clamp, ActivationMode::Manual)
    }
}

/// An item the navigator can land on or skip
pub trait Navigable {
    fn is_disabled(&self) -> bool;
}

impl Navigable for bool {
    /// A bare flag reads as "disabled"
    fn is_disabled(&self) -> bool {
        *self
    }
}

/// `Item{id, disabled}` of a navigable collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub disabled: bool,
}

impl NavItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), disabled: false }
    }

    pub fn disabled(id: impl Into<String>) -> Self {
        Self { id: id.into(), disabled: true }
    }
}

impl Navigable for NavItem {
    fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Outcome of one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RovingDecision {
    /// Not a navigation key here; the host default applies
    Ignored,
    /// Navigation key consumed, active index unchanged
    Stay,
    /// New active index; `select` in automatic mode
    Move { index: usize, select: bool },
    /// Manual-mode commit of the current index
    Select { index: usize },
}

impl RovingDecision {
    /// Index the widget should make active, if any
    pub fn target(&self) -> Option<usize> {
        match *self {
            Self::Move { index, .. } | Self::Select { index } => Some(index),
            Self::Ignored | Self::Stay => None,
        }
    }

    pub fn selects(&self) -> bool {
        matches!(self, Self::Move { select: true, .. } | Self::Select { .. })
    }

    pub fn disposition(&self) -> KeyDisposition {
        match self {
            Self::Ignored => KeyDisposition::PassThrough,
            _ => KeyDisposition::Handled,
        }
    }
}

/// Stateless navigator
#[derive(Debug, Clone, Copy, Default)]
pub struct RovingNavigator {
    config: RovingConfig,
}

impl RovingNavigator {
    pub fn new(config: RovingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RovingConfig {
        self.config
    }

    /// Decide what `event` does given the current index and items
    pub fn decide<T: Navigable>(&self, event: &KeyEvent, current: usize, items: &[T]) -> RovingDecision {
        if event.has_command_modifier() {
            return RovingDecision::Ignored;
        }

        let decision = match event.key {
            Key::Home => self.land(first_enabled(items)),
            Key::End => self.land(last_enabled(items)),
            ref key if key.is_activation() => match self.config.activation {
                ActivationMode::Manual if items.get(current).is_some_and(|i| !i.is_disabled()) => {
                    RovingDecision::Select { index: current }
                }
                _ => RovingDecision::Ignored,
            },
            ref key => match self.delta(key) {
                Some(delta) => self.land(step(current, delta, items, self.config.wrap)),
                None => RovingDecision::Ignored,
            },
        };

        tracing::trace!("roving {} from {} -> {:?}", event.display(), current, decision);
        decision
    }

    /// Wrap the navigator in a key handler that reports moves to `callback`
    pub fn key_handler<F>(self, callback: F) -> RovingKeyHandler<F>
    where
        F: FnMut(RovingDecision),
    {
        RovingKeyHandler { navigator: self, callback }
    }

    fn land(&self, target: Option<usize>) -> RovingDecision {
        match target {
            Some(index) => RovingDecision::Move {
                index,
                select: self.config.activation == ActivationMode::Automatic,
            },
            None => RovingDecision::Stay,
        }
    }

    fn delta(&self, key: &Key) -> Option<isize> {
        let horizontal = matches!(self.config.orientation, Orientation::Horizontal | Orientation::Both);
        let vertical = matches!(self.config.orientation, Orientation::Vertical | Orientation::Both);
        match key {
            Key::ArrowRight if horizontal => Some(1),
            Key::ArrowLeft if horizontal => Some(-1),
            Key::ArrowDown if vertical => Some(1),
            Key::ArrowUp if vertical => Some(-1),
            _ => None,
        }
    }
}

/// Key handler produced by [`RovingNavigator::key_handler`]
pub struct RovingKeyHandler<F> {
    navigator: RovingNavigator,
    callback: F,
}

impl<F: FnMut(RovingDecision)> RovingKeyHandler<F> {
    /// Decide, report `Move`/`Select` to the callback, and tell the host
    /// whether to suppress its default action
    pub fn handle<T: Navigable>(&mut self, event: &KeyEvent, current: usize, items: &[T]) -> KeyDisposition {
        let decision = self.navigator.decide(event, current, items);
        if decision.target().is_some() {
            (self.callback)(decision);
        }
        decision.disposition()
    }
}

/// Step from `current` by `delta`, skipping disabled items in the same
/// direction until an enabled one turns up or the start is revisited
pub fn step<T: Navigable>(current: usize, delta: isize, items: &[T], wrap: WrapPolicy) -> Option<usize> {
    let count = items.len();
    if count == 0 {
        return None;
    }
    let start = current.min(count - 1);
    let mut index = start;

    loop {
        let next = index as isize + delta;
        index = match wrap {
            WrapPolicy::Wrap => next.rem_euclid(count as isize) as usize,
            WrapPolicy::Clamp if next < 0 || next >= count as isize => return None,
            WrapPolicy::Clamp => next as usize,
        };
        if index == start {
            return None;
        }
        if !items[index].is_disabled() {
            return Some(index);
        }
    }
}

pub fn first_enabled<T: Navigable>(items: &[T]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

pub fn last_enabled<T: Navigable>(items: &[T]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}
