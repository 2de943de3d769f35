//! Index state machine for a carousel.
//!
//! [`NavState`] owns the current index, the wrap policy, and the number of slides. Every
//! transition funnels through [`NavState::clamp_or_wrap`], so the index is always valid for the
//! current count: `index < count` when `count > 0`, otherwise `index == 0`.

use std::fmt;

use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;
use crate::keymap::Binding;

/// Stable identity of a slide within its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u64);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A change of the current index. Only produced when `from != to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    index: usize,
    wrap: bool,
    count: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            index: 0,
            wrap: true,
            count: 0,
        }
    }
}

impl NavState {
    pub fn new(count: usize, wrap: bool) -> Self {
        Self {
            index: 0,
            wrap,
            count,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn at_last(&self) -> bool {
        self.index == self.last_index()
    }

    /// Resolves an arbitrary target against the current count and wrap policy.
    pub fn clamp_or_wrap(&self, target: i64) -> usize {
        if self.count == 0 {
            return 0;
        }
        let n = self.count as i64;
        if self.wrap {
            target.rem_euclid(n) as usize
        } else {
            target.clamp(0, n - 1) as usize
        }
    }

    /// Unsigned counterpart of [`NavState::clamp_or_wrap`], resolved without leaving `usize`.
    pub fn resolve_index(&self, target: usize) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.wrap {
            target % self.count
        } else {
            target.min(self.count - 1)
        }
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.count == 0 || (!self.wrap && self.at_last()) {
            return None;
        }
        self.move_to(self.clamp_or_wrap(self.index as i64 + 1))
    }

    pub fn prev(&mut self) -> Option<Transition> {
        if self.count == 0 || (!self.wrap && self.at_first()) {
            return None;
        }
        self.move_to(self.clamp_or_wrap(self.index as i64 - 1))
    }

    pub fn go_to(&mut self, target: i64) -> Option<Transition> {
        let to = self.clamp_or_wrap(target);
        self.move_to(to)
    }

    pub fn go_to_index(&mut self, target: usize) -> Option<Transition> {
        let to = self.resolve_index(target);
        self.move_to(to)
    }

    pub fn first(&mut self) -> Option<Transition> {
        self.move_to(0)
    }

    pub fn last(&mut self) -> Option<Transition> {
        self.move_to(self.last_index())
    }

    /// Updates the slide count after a structural change and re-validates the index once.
    pub fn set_count(&mut self, count: usize) -> Option<Transition> {
        self.count = count;
        self.move_to(self.clamp_or_wrap(self.index as i64))
    }

    /// Switching the policy never moves a valid index.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    pub fn apply(&mut self, action: NavAction) -> Option<Transition> {
        match action {
            NavAction::Prev => self.prev(),
            NavAction::Next => self.next(),
            NavAction::First => self.first(),
            NavAction::Last => self.last(),
        }
    }

    fn move_to(&mut self, to: usize) -> Option<Transition> {
        if to == self.index {
            return None;
        }
        let from = self.index;
        self.index = to;
        tracing::debug!(from, to, count = self.count, wrap = self.wrap, "index changed");
        Some(Transition { from, to })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    First,
    Last,
}

#[derive(Clone, Debug)]
pub struct NavBindings {
    pub prev: Vec<KeyEvent>,
    pub next: Vec<KeyEvent>,
    pub first: Vec<KeyEvent>,
    pub last: Vec<KeyEvent>,
}

impl Default for NavBindings {
    fn default() -> Self {
        Self {
            prev: vec![keymap::key(KeyCode::Left), keymap::key_char('h')],
            next: vec![keymap::key(KeyCode::Right), keymap::key_char('l')],
            first: vec![keymap::key(KeyCode::Home), keymap::key_char('g')],
            last: vec![keymap::key(KeyCode::End), keymap::key_char('G')],
        }
    }
}

impl NavBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<NavAction> {
        if keymap::any_matches(&self.prev, key) {
            return Some(NavAction::Prev);
        }
        if keymap::any_matches(&self.next, key) {
            return Some(NavAction::Next);
        }
        if keymap::any_matches(&self.first, key) {
            return Some(NavAction::First);
        }
        if keymap::any_matches(&self.last, key) {
            return Some(NavAction::Last);
        }
        None
    }

    /// Help-bar entries for these bindings.
    pub fn help(&self) -> Vec<Binding> {
        vec![
            Binding::new("←/h", "prev", self.prev.clone()),
            Binding::new("→/l", "next", self.next.clone()),
            Binding::new("g/G", "first/last", [self.first.clone(), self.last.clone()].concat()),
        ]
    }
}
