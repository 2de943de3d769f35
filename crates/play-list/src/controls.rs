use play_list_core::nav::NavState;
use ratatui::layout::Position;
use ratatui::layout::Rect;

/// One position indicator per slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dot {
    pub position: usize,
    pub active: bool,
    /// 1-based, e.g. `Slide 2 of 4`.
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavControls {
    pub visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// What a pointer position landed on in the last rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlHit {
    Prev,
    Next,
    Dot(usize),
    Card,
}

/// Hit areas recorded while rendering, in absolute buffer coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlLayout {
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
    pub card: Option<Rect>,
}

impl ControlLayout {
    /// Dots take precedence over the card since they sit on its border.
    pub fn hit(&self, x: u16, y: u16) -> Option<ControlHit> {
        let p = Position::new(x, y);
        if let Some(i) = self.dots.iter().position(|r| r.contains(p)) {
            return Some(ControlHit::Dot(i));
        }
        if self.prev.is_some_and(|r| r.contains(p)) {
            return Some(ControlHit::Prev);
        }
        if self.next.is_some_and(|r| r.contains(p)) {
            return Some(ControlHit::Next);
        }
        if self.card.is_some_and(|r| r.contains(p)) {
            return Some(ControlHit::Card);
        }
        None
    }
}

pub fn dot_label(position: usize, count: usize) -> String {
    format!("Slide {} of {}", position + 1, count)
}

pub fn dots(state: &NavState) -> Vec<Dot> {
    (0..state.count())
        .map(|position| Dot {
            position,
            active: position == state.index(),
            label: dot_label(position, state.count()),
        })
        .collect()
}

/// Arrows are hidden with fewer than two slides. Without wrap they are disabled at the ends.
pub fn nav_controls(state: &NavState) -> NavControls {
    let visible = state.count() > 1;
    NavControls {
        visible,
        prev_enabled: visible && (state.wrap() || !state.at_first()),
        next_enabled: visible && (state.wrap() || !state.at_last()),
    }
}
