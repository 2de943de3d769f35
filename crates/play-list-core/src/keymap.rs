use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// A set of keys plus the short text shown for them in a help bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        any_matches(&self.keys, event)
    }
}

/// Character keys ignore shift since the character already encodes it (terminals report `G` as
/// shift+`G`).
pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    if pattern.code != event.code {
        return false;
    }
    let (p, e) = (pattern.modifiers, event.modifiers);
    match pattern.code {
        KeyCode::Char(_) => p.ctrl == e.ctrl && p.alt == e.alt,
        _ => p == e,
    }
}

pub fn any_matches(patterns: &[KeyEvent], event: &KeyEvent) -> bool {
    patterns.iter().any(|p| key_event_matches(p, event))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}
