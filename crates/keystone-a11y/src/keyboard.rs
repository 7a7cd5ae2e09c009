//! Keyboard Input
//!
//! Key events as the host delivers them, and what a controller did with one.

/// Logical key, parsed from DOM `KeyboardEvent.key` values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Character(char),
    Other(String),
}

impl Key {
    pub fn parse(value: &str) -> Self {
        match value {
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other(other.to_string()),
                }
            }
        }
    }

    /// Enter or Space
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// A key press with its modifier state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false, ctrl: false, alt: false, meta: false }
    }

    /// Build from a DOM key string
    pub fn from_dom(value: &str) -> Self {
        Self::new(Key::parse(value))
    }

    pub fn shift(mut self) -> Self { self.shift = true; self }
    pub fn ctrl(mut self) -> Self { self.ctrl = true; self }
    pub fn alt(mut self) -> Self { self.alt = true; self }
    pub fn meta(mut self) -> Self { self.meta = true; self }

    /// Ctrl, Alt or Meta held (Shift does not count)
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    pub fn display(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl { parts.push("Ctrl".into()); }
        if self.alt { parts.push("Alt".into()); }
        if self.shift { parts.push("Shift".into()); }
        if self.meta { parts.push("Cmd".into()); }
        parts.push(match &self.key {
            Key::Character(c) => c.to_string(),
            Key::Other(name) => name.clone(),
            key => format!("{:?}", key),
        });
        parts.join("+")
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// What a controller did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Decision applied; the host must suppress the default action
    Handled,
    /// Not ours; the host's default action applies
    PassThrough,
}

impl KeyDisposition {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dom_keys() {
        assert_eq!(Key::parse("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::parse("Left"), Key::ArrowLeft);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("a"), Key::Character('a'));
        assert_eq!(Key::parse("F5"), Key::Other("F5".into()));
    }

    #[test]
    fn test_modifiers() {
        let event = KeyEvent::from_dom("Tab").shift();
        assert!(event.shift);
        assert!(!event.has_command_modifier());
        assert_eq!(event.display(), "Shift+Tab");
        assert!(KeyEvent::new(Key::Home).ctrl().has_command_modifier());
    }
}
