use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;
use crate::viewport::ViewportState;

/// Vertical scrolling inside a slide body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    Up,
    Down,
    PageUp,
    PageDown,
}

#[derive(Clone, Debug)]
pub struct ScrollBindings {
    pub line_step: i32,
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub page_up: Vec<KeyEvent>,
    pub page_down: Vec<KeyEvent>,
}

impl Default for ScrollBindings {
    fn default() -> Self {
        Self {
            line_step: 1,
            up: vec![keymap::key(KeyCode::Up), keymap::key_char('k')],
            down: vec![keymap::key(KeyCode::Down), keymap::key_char('j')],
            page_up: vec![keymap::key(KeyCode::PageUp), keymap::key_ctrl('u')],
            page_down: vec![keymap::key(KeyCode::PageDown), keymap::key_ctrl('d')],
        }
    }
}

impl ScrollBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<ScrollAction> {
        if keymap::any_matches(&self.up, key) {
            return Some(ScrollAction::Up);
        }
        if keymap::any_matches(&self.down, key) {
            return Some(ScrollAction::Down);
        }
        if keymap::any_matches(&self.page_up, key) {
            return Some(ScrollAction::PageUp);
        }
        if keymap::any_matches(&self.page_down, key) {
            return Some(ScrollAction::PageDown);
        }
        None
    }

    /// Applies `action` and reports whether the offset moved.
    pub fn apply(&self, state: &mut ViewportState, action: ScrollAction) -> bool {
        let before = state.y;
        match action {
            ScrollAction::Up => state.scroll_y_by(-self.line_step),
            ScrollAction::Down => state.scroll_y_by(self.line_step),
            ScrollAction::PageUp => state.page_up(),
            ScrollAction::PageDown => state.page_down(),
        }
        state.y != before
    }
}
