use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::variant::SlideVariant;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub kicker: Style,
    pub title: Style,
    pub card: Style,
    pub card_border: Style,
    pub nav_arrow: Style,
    pub nav_arrow_disabled: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
    pub variant_blue: Color,
    pub variant_orange: Color,
    pub variant_green: Color,
    pub variant_purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            kicker: Style::default().blue().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            card: Style::default(),
            card_border: Style::default().blue(),
            nav_arrow: Style::default().blue().add_modifier(Modifier::BOLD),
            nav_arrow_disabled: Style::default().dark_gray(),
            dot_active: Style::default().blue(),
            dot_inactive: Style::default().dark_gray(),
            variant_blue: Color::Rgb(0xee, 0xf5, 0xff),
            variant_orange: Color::Rgb(0xff, 0xf3, 0xe6),
            variant_green: Color::Rgb(0xec, 0xff, 0xf2),
            variant_purple: Color::Rgb(0xf5, 0xf0, 0xff),
        }
    }
}

impl Theme {
    /// Card style with the variant's background applied, if any.
    pub fn card_for(&self, variant: Option<SlideVariant>) -> Style {
        match variant {
            None => self.card,
            Some(v) => self.card.bg(self.variant_color(v)).fg(Color::Black),
        }
    }

    pub fn variant_color(&self, variant: SlideVariant) -> Color {
        match variant {
            SlideVariant::Blue => self.variant_blue,
            SlideVariant::Orange => self.variant_orange,
            SlideVariant::Green => self.variant_green,
            SlideVariant::Purple => self.variant_purple,
        }
    }
}
