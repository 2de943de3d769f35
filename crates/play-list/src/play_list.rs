use play_list_core::PlayListError;
use play_list_core::Result;
use play_list_core::input::InputEvent;
use play_list_core::input::KeyEvent;
use play_list_core::input::MouseEvent;
use play_list_core::input::MouseEventKind;
use play_list_core::keymap::Binding;
use play_list_core::nav::NavAction;
use play_list_core::nav::NavBindings;
use play_list_core::nav::NavState;
use play_list_core::nav::SlideId;
use play_list_core::nav::Transition;
use play_list_core::render;
use play_list_core::scroll::ScrollAction;
use play_list_core::scroll::ScrollBindings;
use play_list_core::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::controls;
use crate::controls::ControlHit;
use crate::controls::ControlLayout;
use crate::controls::Dot;
use crate::controls::NavControls;
use crate::slide::IndexChangeRequest;
use crate::slide::PositionSink;
use crate::slide::Slide;
use crate::slide::SlideOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayListAction {
    None,
    Redraw,
    IndexChanged(usize),
}

#[derive(Clone, Debug)]
pub struct PlayListOptions {
    pub show_arrows: bool,
    /// Skip drawing arrows that are disabled (wrap off, at an end) instead of dimming them.
    pub hide_disabled_arrows: bool,
    pub show_dots: bool,
    pub arrow_width: u16,
    pub prev_symbol: String,
    pub next_symbol: String,
    pub dot_active_symbol: String,
    pub dot_inactive_symbol: String,
    pub style: Style,
    pub nav: NavBindings,
    pub scroll: ScrollBindings,
    /// Applied to every slide on insertion.
    pub slide: SlideOptions,
}

impl Default for PlayListOptions {
    fn default() -> Self {
        Self {
            show_arrows: true,
            hide_disabled_arrows: false,
            show_dots: true,
            arrow_width: 3,
            prev_symbol: "‹".to_string(),
            next_symbol: "›".to_string(),
            dot_active_symbol: "●".to_string(),
            dot_inactive_symbol: "○".to_string(),
            style: Style::default(),
            nav: NavBindings::default(),
            scroll: ScrollBindings::default(),
            slide: SlideOptions::default(),
        }
    }
}

/// A carousel over an owned, ordered list of [`Slide`]s.
///
/// Exactly one slide is active whenever the list is non-empty, and it is always the slide at
/// [`PlayList::index`]. Every mutation goes through one re-sync step, so this holds whenever a
/// method returns.
#[derive(Debug)]
pub struct PlayList {
    slides: Vec<Slide>,
    nav: NavState,
    options: PlayListOptions,
    layout: ControlLayout,
    next_id: u64,
}

impl Default for PlayList {
    fn default() -> Self {
        Self::with_options(PlayListOptions::default())
    }
}

impl PlayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PlayListOptions) -> Self {
        Self {
            slides: Vec::new(),
            nav: NavState::default(),
            options,
            layout: ControlLayout::default(),
            next_id: 1,
        }
    }

    pub fn from_slides(slides: impl IntoIterator<Item = Slide>) -> Self {
        let mut p = Self::new();
        p.set_slides(slides);
        p
    }

    pub fn options(&self) -> &PlayListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PlayListOptions) {
        for slide in &mut self.slides {
            slide.set_options(options.slide.clone());
        }
        self.options = options;
    }

    pub fn index(&self) -> usize {
        self.nav.index()
    }

    /// Sets the index using the same wrap/clamp policy as navigation.
    pub fn set_index(&mut self, index: usize) {
        self.go_to(index);
    }

    pub fn wrap(&self) -> bool {
        self.nav.wrap()
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.nav.set_wrap(wrap);
        self.sync();
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id() == Some(id))
    }

    /// Content edits only; activity is owned by the play-list.
    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id() == Some(id))
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.nav.index()).filter(|s| s.is_active())
    }

    pub fn slide_position(&self, id: SlideId) -> Result<usize> {
        self.slides
            .iter()
            .position(|s| s.id() == Some(id))
            .ok_or(PlayListError::SlideNotFound(id))
    }

    pub fn push_slide(&mut self, slide: Slide) -> SlideId {
        self.insert_slide(self.slides.len(), slide)
    }

    /// Inserts at `position` (clamped to the end). The current index is kept as a number, so
    /// inserting before it shows a different slide.
    pub fn insert_slide(&mut self, position: usize, mut slide: Slide) -> SlideId {
        let id = self.allocate_id();
        slide.attach(id);
        slide.set_options(self.options.slide.clone());
        let position = position.min(self.slides.len());
        self.slides.insert(position, slide);
        tracing::debug!(%id, position, count = self.slides.len(), "slide inserted");
        self.sync();
        id
    }

    pub fn remove_slide(&mut self, id: SlideId) -> Result<Slide> {
        let position = self.slide_position(id)?;
        let mut slide = self.slides.remove(position);
        slide.detach();
        tracing::debug!(%id, position, count = self.slides.len(), "slide removed");
        self.sync();
        Ok(slide)
    }

    /// Replaces all slides, keeping the current index where it is still valid.
    pub fn set_slides(&mut self, slides: impl IntoIterator<Item = Slide>) {
        for mut old in self.slides.drain(..) {
            old.detach();
        }
        let mut fresh = Vec::new();
        for mut slide in slides {
            let id = self.allocate_id();
            slide.attach(id);
            slide.set_options(self.options.slide.clone());
            fresh.push(slide);
        }
        self.slides = fresh;
        tracing::debug!(count = self.slides.len(), "slides replaced");
        self.sync();
    }

    pub fn clear(&mut self) {
        self.set_slides(Vec::new());
    }

    pub fn next(&mut self) -> bool {
        self.navigate(NavState::next)
    }

    pub fn prev(&mut self) -> bool {
        self.navigate(NavState::prev)
    }

    pub fn first(&mut self) -> bool {
        self.navigate(NavState::first)
    }

    pub fn last(&mut self) -> bool {
        self.navigate(NavState::last)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.navigate(|nav| nav.go_to_index(index))
    }

    /// Like [`PlayList::go_to`] but accepts negative targets, so `-1` with wrap shows the last
    /// slide.
    pub fn go_to_signed(&mut self, target: i64) -> bool {
        self.navigate(|nav| nav.go_to(target))
    }

    pub fn dots(&self) -> Vec<Dot> {
        controls::dots(&self.nav)
    }

    pub fn nav_controls(&self) -> NavControls {
        controls::nav_controls(&self.nav)
    }

    /// Text for screen readers or a status line, e.g. `Slide 2 of 4`. When the active slide's
    /// body overflows its card the scroll position is appended, e.g. `Slide 2 of 4 · 40%`.
    pub fn status_line(&self) -> String {
        if self.slides.is_empty() {
            return "No slides".to_string();
        }
        let label = controls::dot_label(self.nav.index(), self.slides.len());
        match self.active_slide().and_then(|s| s.viewport().percent_y()) {
            Some(pct) => format!("{label} · {pct}%"),
            None => label,
        }
    }

    pub fn help_bindings(&self) -> Vec<Binding> {
        let mut bindings = self.options.nav.help();
        let scroll = &self.options.scroll;
        bindings.push(Binding::new(
            "↑/↓",
            "scroll",
            [scroll.up.clone(), scroll.down.clone()].concat(),
        ));
        bindings
    }

    /// Hit areas from the last [`PlayList::render`].
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    pub fn handle_event(&mut self, event: InputEvent) -> PlayListAction {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.layout = ControlLayout::default();
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, self.options.style);

        let controls = self.nav_controls();
        let arrow_w = self.options.arrow_width;
        let with_arrows =
            self.options.show_arrows && controls.visible && area.width > arrow_w.saturating_mul(2);
        let card = if with_arrows {
            Rect::new(area.x + arrow_w, area.y, area.width - arrow_w * 2, area.height)
        } else {
            area
        };

        if with_arrows {
            let prev_area = Rect::new(area.x, area.y, arrow_w, area.height);
            let next_area = Rect::new(card.x + card.width, area.y, arrow_w, area.height);
            self.layout.prev = self.render_arrow(prev_area, buf, theme, true, controls.prev_enabled);
            self.layout.next = self.render_arrow(next_area, buf, theme, false, controls.next_enabled);
        }

        if let Some(slide) = self.slides.get_mut(self.nav.index()) {
            slide.render(card, buf, theme);
            self.layout.card = Some(card);
        }

        if self.options.show_dots && self.slides.len() > 1 {
            self.layout.dots = self.render_dots(card, buf, theme);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PlayListAction {
        if let Some(action) = self.options.nav.action_for(&key) {
            return self.apply_nav(action);
        }
        if let Some(action) = self.options.scroll.action_for(&key) {
            return self.scroll_active(action);
        }
        tracing::trace!(?key, "key not bound");
        PlayListAction::None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> PlayListAction {
        let hit = self.layout.hit(mouse.x, mouse.y);
        match mouse.kind {
            MouseEventKind::ScrollUp if hit == Some(ControlHit::Card) => {
                self.scroll_active(ScrollAction::Up)
            }
            MouseEventKind::ScrollDown if hit == Some(ControlHit::Card) => {
                self.scroll_active(ScrollAction::Down)
            }
            _ if mouse.is_left_click() => match hit {
                Some(ControlHit::Prev) => self.apply_nav(NavAction::Prev),
                Some(ControlHit::Next) => self.apply_nav(NavAction::Next),
                Some(ControlHit::Dot(i)) => {
                    let moved = self.go_to(i);
                    self.changed(moved)
                }
                Some(ControlHit::Card) => self.click_active_slide(),
                None => PlayListAction::None,
            },
            _ => PlayListAction::None,
        }
    }

    /// Runs the active slide's click handler with this play-list as the position sink.
    fn click_active_slide(&mut self) -> PlayListAction {
        let mut requested = None;
        if let Some(slide) = self.slides.get(self.nav.index()) {
            slide.report_position(&self.slides, &mut |req: IndexChangeRequest| {
                requested = Some(req)
            });
        }
        let before = self.nav.index();
        if let Some(req) = requested {
            self.index_change_requested(req);
        }
        self.changed(self.nav.index() != before)
    }

    fn apply_nav(&mut self, action: NavAction) -> PlayListAction {
        let moved = self.navigate(|nav| nav.apply(action));
        self.changed(moved)
    }

    fn scroll_active(&mut self, action: ScrollAction) -> PlayListAction {
        let Some(slide) = self.slides.get_mut(self.nav.index()) else {
            return PlayListAction::None;
        };
        if slide.scroll(&self.options.scroll, action) {
            PlayListAction::Redraw
        } else {
            PlayListAction::None
        }
    }

    fn changed(&self, moved: bool) -> PlayListAction {
        if moved {
            PlayListAction::IndexChanged(self.nav.index())
        } else {
            PlayListAction::None
        }
    }

    fn navigate(&mut self, f: impl FnOnce(&mut NavState) -> Option<Transition>) -> bool {
        let moved = f(&mut self.nav).is_some();
        self.sync();
        moved
    }

    /// Re-validates the index against the slide count, then marks exactly the slide at the index
    /// active.
    ///
    /// Hit areas from the last render are dropped when the count changes, so stale dots can't
    /// navigate until the next frame records fresh ones.
    fn sync(&mut self) {
        if self.nav.count() != self.slides.len() {
            self.layout = ControlLayout::default();
        }
        self.nav.set_count(self.slides.len());
        let index = self.nav.index();
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == index);
        }
    }

    fn allocate_id(&mut self) -> SlideId {
        let id = SlideId(self.next_id);
        self.next_id += 1;
        id
    }

    fn render_arrow(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        is_prev: bool,
        enabled: bool,
    ) -> Option<Rect> {
        if !enabled && self.options.hide_disabled_arrows {
            return None;
        }
        let symbol = if is_prev {
            &self.options.prev_symbol
        } else {
            &self.options.next_symbol
        };
        let style = if enabled {
            theme.nav_arrow
        } else {
            theme.nav_arrow_disabled
        };
        let x = render::centered_x(area, render::str_cols(symbol));
        let y = area.y + area.height / 2;
        render::render_str_clipped(x, y, area.width, buf, symbol, style);
        enabled.then_some(area)
    }

    fn render_dots(&self, card: Rect, buf: &mut Buffer, theme: &Theme) -> Vec<Rect> {
        if card.height == 0 || card.width < 4 {
            return Vec::new();
        }
        let y = card.y + card.height - 1;
        let right = card.x + card.width - 2;
        let mut x = card.x + 2;
        let mut rects = Vec::new();
        for dot in self.dots() {
            let (symbol, style) = if dot.active {
                (&self.options.dot_active_symbol, theme.dot_active)
            } else {
                (&self.options.dot_inactive_symbol, theme.dot_inactive)
            };
            let w = render::str_cols(symbol).max(1);
            if x + w > right {
                break;
            }
            render::render_str_clipped(x, y, w, buf, symbol, style);
            rects.push(Rect::new(x, y, w, 1));
            x += w + 1;
        }
        rects
    }
}

impl PositionSink for PlayList {
    fn index_change_requested(&mut self, request: IndexChangeRequest) {
        self.go_to(request.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_list_core::input::KeyCode;
    use play_list_core::keymap;

    fn play_list(n: usize, wrap: bool) -> PlayList {
        let mut p = PlayList::from_slides((0..n).map(|i| Slide::new(format!("s{i}"), "t")));
        p.set_wrap(wrap);
        p
    }

    fn active_positions(p: &PlayList) -> Vec<usize> {
        p.slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(keymap::key(code))
    }

    #[test]
    fn arrow_keys_navigate_and_report_changes() {
        let mut p = play_list(3, true);
        assert_eq!(p.handle_event(key(KeyCode::Right)), PlayListAction::IndexChanged(1));
        assert_eq!(p.handle_event(key(KeyCode::Left)), PlayListAction::IndexChanged(0));
        assert_eq!(p.handle_event(key(KeyCode::Left)), PlayListAction::IndexChanged(2));
        assert_eq!(p.handle_event(key(KeyCode::Home)), PlayListAction::IndexChanged(0));
        assert_eq!(p.handle_event(key(KeyCode::Char('x'))), PlayListAction::None);
    }

    #[test]
    fn boundary_without_wrap_is_a_no_op() {
        let mut p = play_list(4, false);
        assert_eq!(p.handle_event(key(KeyCode::Left)), PlayListAction::None);
        assert_eq!(p.index(), 0);
        assert_eq!(active_positions(&p), vec![0]);
    }

    #[test]
    fn removing_the_active_last_slide_resyncs() {
        let mut p = play_list(3, false);
        p.last();
        let last = p.slides()[2].id().unwrap();
        let removed = p.remove_slide(last).unwrap();
        assert_eq!(p.index(), 1);
        assert_eq!(active_positions(&p), vec![1]);
        assert!(!removed.is_active());
        assert_eq!(removed.id(), None);
    }

    #[test]
    fn removing_an_unknown_slide_is_an_error() {
        let mut p = play_list(2, true);
        assert_eq!(
            p.remove_slide(SlideId(999)).err(),
            Some(PlayListError::SlideNotFound(SlideId(999)))
        );
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn first_insert_activates_the_slide() {
        let mut p = PlayList::new();
        assert!(p.active_slide().is_none());
        let id = p.push_slide(Slide::new("a", "b"));
        assert_eq!(p.active_slide().and_then(Slide::id), Some(id));
    }

    #[test]
    fn position_sink_goes_to_requested_index() {
        let mut p = play_list(5, false);
        p.index_change_requested(IndexChangeRequest { index: 3 });
        assert_eq!(p.index(), 3);
        p.index_change_requested(IndexChangeRequest { index: 42 });
        assert_eq!(p.index(), 4);
    }

    #[test]
    fn status_line_is_one_based() {
        let mut p = play_list(4, true);
        p.go_to(2);
        assert_eq!(p.status_line(), "Slide 3 of 4");
        assert_eq!(PlayList::new().status_line(), "No slides");
    }

    #[test]
    fn status_line_shows_scroll_position_of_an_overflowing_body() {
        let body = (0..20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut p = PlayList::from_slides([Slide::new("", "").with_body(&body)]);
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);
        p.render(area, &mut buf, &Theme::default());
        assert_eq!(p.status_line(), "Slide 1 of 1 · 25%");
    }

    #[test]
    fn go_to_wraps_huge_indices_by_their_real_value() {
        let mut p = play_list(3, true);
        p.go_to(1);
        assert!(p.go_to(usize::MAX));
        assert_eq!(p.index(), usize::MAX % 3);
        p.set_index(usize::MAX - 1);
        assert_eq!(p.index(), (usize::MAX - 1) % 3);

        let mut clamped = play_list(3, false);
        clamped.go_to(usize::MAX);
        assert_eq!(clamped.index(), 2);
    }

    #[test]
    fn removing_slides_drops_stale_dot_hit_areas() {
        let mut p = play_list(4, true);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        p.render(area, &mut buf, &Theme::default());
        let old_dot = p.layout().dots[3];

        let ids: Vec<SlideId> = p.slides().iter().filter_map(Slide::id).collect();
        p.remove_slide(ids[3]).unwrap();
        p.remove_slide(ids[2]).unwrap();
        assert!(p.layout().dots.is_empty());
        assert_eq!(
            p.handle_event(InputEvent::Mouse(MouseEvent::click(old_dot.x, old_dot.y))),
            PlayListAction::None
        );
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn toggling_wrap_keeps_index_and_active_slide() {
        let mut p = play_list(3, true);
        p.last();
        p.set_wrap(false);
        assert!(!p.wrap());
        assert_eq!(p.index(), 2);
        assert_eq!(active_positions(&p), vec![2]);
        assert!(!p.next());
    }
}
