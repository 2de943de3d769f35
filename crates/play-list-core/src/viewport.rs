use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Vertical scroll state for a block of pre-wrapped lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn page_down(&mut self) {
        self.scroll_y_by(self.viewport_h.saturating_sub(1) as i32);
    }

    pub fn page_up(&mut self) {
        self.scroll_y_by(-(self.viewport_h.saturating_sub(1) as i32));
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    pub fn overflows(&self) -> bool {
        self.content_h > self.viewport_h as u32
    }

    pub fn percent_y(&self) -> Option<u8> {
        if self.content_h == 0 || self.viewport_h == 0 || !self.overflows() {
            return None;
        }
        let visible_bottom = self.y.saturating_add(self.viewport_h as u32) as f64;
        let pct = (visible_bottom / self.content_h as f64 * 100.0).round();
        Some(pct.clamp(0.0, 100.0) as u8)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportOptions {
    pub style: Style,
    pub show_scrollbar: bool,
    pub scrollbar_style: Style,
}

/// Draws `lines` starting at the viewport offset. The scrollbar column, when shown, is only
/// painted if the content overflows.
pub fn render_lines(
    area: Rect,
    buf: &mut Buffer,
    lines: &[String],
    state: &ViewportState,
    options: &ViewportOptions,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (text_area, scrollbar_x) = if options.show_scrollbar && area.width >= 2 {
        (
            Rect::new(area.x, area.y, area.width - 1, area.height),
            Some(area.x + area.width - 1),
        )
    } else {
        (area, None)
    };

    for row in 0..text_area.height {
        let y = row + text_area.y;
        let idx = (state.y as usize).saturating_add(row as usize);
        buf.set_style(Rect::new(text_area.x, y, text_area.width, 1), options.style);
        if let Some(line) = lines.get(idx) {
            render::render_str_clipped(text_area.x, y, text_area.width, buf, line, options.style);
        }
    }

    if let Some(sb_x) = scrollbar_x {
        if state.overflows() {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                state,
                options.scrollbar_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_offset_to_content() {
        let mut s = ViewportState::default();
        s.set_viewport(5);
        s.set_content(6);
        s.y = 99;
        s.clamp();
        assert_eq!(s.y, 1);

        s.set_content(3);
        assert_eq!(s.y, 0);
        assert!(!s.overflows());
    }

    #[test]
    fn percent_y_tracks_the_visible_bottom() {
        let mut s = ViewportState::default();
        s.set_viewport(5);
        s.set_content(3);
        assert_eq!(s.percent_y(), None);
        s.set_content(20);
        assert_eq!(s.percent_y(), Some(25));
        s.scroll_y_by(15);
        assert_eq!(s.percent_y(), Some(100));
    }

    #[test]
    fn render_lines_starts_at_offset() {
        let mut s = ViewportState::default();
        s.set_viewport(2);
        s.set_content(3);
        s.y = 1;
        let lines = vec!["one".to_string(), "two".to_string(), "six".to_string()];
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        render_lines(
            Rect::new(0, 0, 4, 2),
            &mut buf,
            &lines,
            &s,
            &ViewportOptions::default(),
        );
        assert_eq!(buf[(0, 0)].symbol(), "t");
        assert_eq!(buf[(0, 1)].symbol(), "s");
    }
}
