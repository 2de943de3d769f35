use play_list_core::nav::SlideId;
use play_list_core::render;
use play_list_core::scroll::ScrollAction;
use play_list_core::scroll::ScrollBindings;
use play_list_core::theme::Theme;
use play_list_core::variant::SlideVariant;
use play_list_core::viewport;
use play_list_core::viewport::ViewportOptions;
use play_list_core::viewport::ViewportState;
use play_list_core::wrapping::WrapCache;
use play_list_core::wrapping::WrapMode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Padding;
use ratatui::widgets::Widget;

/// Notification sent by a slide asking its container to show the slide at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChangeRequest {
    pub index: usize,
}

/// Receives [`IndexChangeRequest`]s from slides. Provided by whoever owns the slides.
pub trait PositionSink {
    fn index_change_requested(&mut self, request: IndexChangeRequest);
}

impl<F> PositionSink for F
where
    F: FnMut(IndexChangeRequest),
{
    fn index_change_requested(&mut self, request: IndexChangeRequest) {
        self(request)
    }
}

#[derive(Clone, Debug)]
pub struct SlideOptions {
    pub wrap_mode: WrapMode,
    pub show_scrollbar: bool,
    pub uppercase_kicker: bool,
    pub border_type: BorderType,
    pub padding: Padding,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            wrap_mode: WrapMode::Word,
            show_scrollbar: true,
            uppercase_kicker: true,
            border_type: BorderType::Rounded,
            padding: Padding::horizontal(2),
        }
    }
}

/// A single card of a play-list: a kicker line, a title, and a scrollable body.
///
/// Slides are passive. Only the owning container flips `active`, and an inactive slide renders
/// nothing.
#[derive(Clone, Debug)]
pub struct Slide {
    id: Option<SlideId>,
    top_heading: String,
    second_heading: String,
    body: WrapCache,
    active: bool,
    variant: Option<SlideVariant>,
    options: SlideOptions,
    viewport: ViewportState,
}

impl Slide {
    pub fn new(top_heading: impl Into<String>, second_heading: impl Into<String>) -> Self {
        let options = SlideOptions::default();
        Self {
            id: None,
            top_heading: top_heading.into(),
            second_heading: second_heading.into(),
            body: WrapCache::new(options.wrap_mode),
            active: false,
            variant: None,
            options,
            viewport: ViewportState::default(),
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.set_body(body);
        self
    }

    pub fn with_variant(mut self, variant: SlideVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_options(mut self, options: SlideOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Identity assigned by the container on insertion; `None` while detached.
    pub fn id(&self) -> Option<SlideId> {
        self.id
    }

    pub fn top_heading(&self) -> &str {
        &self.top_heading
    }

    pub fn set_top_heading(&mut self, heading: impl Into<String>) {
        self.top_heading = heading.into();
    }

    pub fn second_heading(&self) -> &str {
        &self.second_heading
    }

    pub fn set_second_heading(&mut self, heading: impl Into<String>) {
        self.second_heading = heading.into();
    }

    pub fn body(&self) -> &[String] {
        self.body.paragraphs()
    }

    pub fn set_body(&mut self, body: &str) {
        self.body.set_text(body);
        self.viewport.to_top();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn variant(&self) -> Option<SlideVariant> {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Option<SlideVariant>) {
        self.variant = variant;
    }

    pub fn options(&self) -> &SlideOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SlideOptions) {
        self.body.set_mode(options.wrap_mode);
        self.options = options;
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub(crate) fn attach(&mut self, id: SlideId) {
        self.id = Some(id);
    }

    pub(crate) fn detach(&mut self) {
        self.id = None;
        self.active = false;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        if self.active && !active {
            self.viewport.to_top();
        }
        self.active = active;
    }

    /// Position of this slide among `siblings`, matched by identity.
    pub fn position_in(&self, siblings: &[Slide]) -> Option<usize> {
        let id = self.id?;
        siblings.iter().position(|s| s.id == Some(id))
    }

    /// Interaction handler: reports this slide's own position to `sink`.
    ///
    /// A detached slide, or one missing from `siblings`, reports nothing.
    pub fn report_position(&self, siblings: &[Slide], sink: &mut dyn PositionSink) {
        match self.position_in(siblings) {
            Some(index) => sink.index_change_requested(IndexChangeRequest { index }),
            None => tracing::trace!(id = ?self.id, "slide not found among siblings"),
        }
    }

    pub fn scroll(&mut self, bindings: &ScrollBindings, action: ScrollAction) -> bool {
        bindings.apply(&mut self.viewport, action)
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.active || area.width == 0 || area.height == 0 {
            return;
        }

        let card_style = theme.card_for(self.variant);
        let block = Block::bordered()
            .border_type(self.options.border_type)
            .border_style(theme.card_border)
            .padding(self.options.padding)
            .style(card_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        let kicker = if self.options.uppercase_kicker {
            self.top_heading.to_uppercase()
        } else {
            self.top_heading.clone()
        };
        if !kicker.is_empty() && y < bottom {
            render::render_str_clipped(
                inner.x,
                y,
                inner.width,
                buf,
                &kicker,
                card_style.patch(theme.kicker),
            );
            y += 1;
        }
        if !self.second_heading.is_empty() && y < bottom {
            render::render_str_clipped(
                inner.x,
                y,
                inner.width,
                buf,
                &self.second_heading,
                card_style.patch(theme.title),
            );
            y += 1;
        }
        if y > inner.y {
            y += 1;
        }
        if y >= bottom {
            return;
        }

        let body_area = Rect::new(inner.x, y, inner.width, bottom - y);
        let scrollbar = self.options.show_scrollbar && body_area.width >= 2;
        let text_w = if scrollbar {
            body_area.width - 1
        } else {
            body_area.width
        };
        self.body.set_width(text_w);
        self.viewport.set_viewport(body_area.height);
        self.viewport.set_content(self.body.height());

        viewport::render_lines(
            body_area,
            buf,
            self.body.lines(),
            &self.viewport,
            &ViewportOptions {
                style: card_style.patch(theme.text_primary),
                show_scrollbar: scrollbar,
                scrollbar_style: card_style.patch(theme.text_muted),
            },
        );
    }
}
