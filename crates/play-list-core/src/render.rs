use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::viewport::ViewportState;

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if state.content_h <= state.viewport_h as u32 || state.content_h == 0 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_y = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.y as f64 / max_y) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            "│"
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Writes `input` at `(x, y)`, stopping before the first character that would cross
/// `max_cols`. Wide characters occupy two cells; tabs expand to four spaces.
///
/// Returns the number of columns written.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for ch in input.chars() {
        if ch == '\t' {
            for _ in 0..4 {
                if dx + 1 > max_cols {
                    return dx;
                }
                put(buf, x + dx, y, " ", style);
                dx += 1;
            }
            continue;
        }

        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            return dx;
        }

        put(buf, x + dx, y, ch.encode_utf8(&mut tmp), style);
        if w == 2 {
            put(buf, x + dx + 1, y, "", style);
        }
        dx += w;
    }
    dx
}

/// Span-aware variant of [`render_str_clipped`]. Spans without a style of their own inherit
/// `fallback_style`.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) -> u16 {
    let mut dx = 0u16;
    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            span.style
        };
        let written = render_str_clipped(
            x + dx,
            y,
            max_cols.saturating_sub(dx),
            buf,
            &span.content,
            style,
        );
        dx += written;
        if (written as usize) < UnicodeWidthStr::width(&*span.content) {
            break;
        }
    }
    dx
}

/// Display width of `s` in terminal columns, saturating at `u16::MAX`.
pub fn str_cols(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Returns the x at which content `cols` wide is horizontally centered within `area`.
pub fn centered_x(area: Rect, cols: u16) -> u16 {
    area.x + area.width.saturating_sub(cols) / 2
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(style);
        cell.set_symbol(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn render_str_clipped_stops_before_wide_overflow() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let written = render_str_clipped(0, 0, 3, &mut buf, "a你好", Style::default());
        assert_eq!(written, 3);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(1, 0)].symbol(), "你");
    }

    #[test]
    fn render_spans_clipped_continues_across_spans() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let spans = [Span::raw("ab"), Span::raw("cdef")];
        let written = render_spans_clipped(0, 0, 4, &mut buf, &spans, Style::default());
        assert_eq!(written, 4);
        assert_eq!(buf[(3, 0)].symbol(), "d");
    }

    #[test]
    fn centered_x_splits_remaining_width() {
        assert_eq!(centered_x(Rect::new(2, 0, 10, 1), 4), 5);
        assert_eq!(centered_x(Rect::new(2, 0, 3, 1), 4), 2);
    }

    #[test]
    fn render_scrollbar_does_not_panic() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(50);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        render_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &state, Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "█");
    }
}
