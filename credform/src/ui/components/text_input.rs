use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

const MASK_CHAR: char = '•';

/// A bordered single-line input titled with its label
pub struct TextInput<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_focused: bool,
    pub is_secret: bool,
    pub is_invalid: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            is_focused: false,
            is_secret: false,
            is_invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn secret(mut self, secret: bool) -> Self {
        self.is_secret = secret;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.is_invalid = invalid;
        self
    }

    /// Text shown in the input; secrets are masked one bullet per char
    pub fn display_value(&self) -> String {
        if self.is_secret {
            std::iter::repeat_n(MASK_CHAR, self.value.chars().count()).collect()
        } else {
            self.value.to_string()
        }
    }

    /// Render the input; sets the terminal cursor when focused
    pub fn render(self, f: &mut Frame, area: Rect) {
        let border_style = theme::input_border_style(self.is_focused, self.is_invalid);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.label), border_style));

        let inner = block.inner(area);
        let display = self.display_value();
        let width = display.chars().count() as u16;

        // Keep the tail visible when the value outgrows the box
        let scroll = width.saturating_sub(inner.width.saturating_sub(1));
        let paragraph = Paragraph::new(Line::from(display))
            .style(Style::default())
            .scroll((0, scroll))
            .block(block);
        f.render_widget(paragraph, area);

        if self.is_focused {
            f.set_cursor_position((inner.x + width - scroll, inner.y));
        }
    }
}
