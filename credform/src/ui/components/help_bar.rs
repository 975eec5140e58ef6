//! Shared help bar component for consistent bottom navigation hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{FormField, FormState, Mode};
use crate::ui::theme;

/// Render a standard help bar with the given text.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_IN_FLIGHT: &str = "Submitting... Esc: cancel";
pub const HELP_TEXT_DASHBOARD: &str = "?: help  q/Esc: quit";

/// Hints for the form, depending on the focused field and mode
pub fn form_help_text(form: &FormState) -> &'static str {
    match (form.focus, form.mode) {
        (FormField::Role, _) => "←/→: choose role  c/a: customer/agent  Tab: next  ?: help",
        (FormField::Submit, Mode::Register) => "Enter: sign up  Ctrl+L: sign in instead  ?: help",
        (FormField::Submit, Mode::Authenticate) => "Enter: sign in  Ctrl+N: sign up instead  ?: help",
        _ => "Tab/↓: next  Shift+Tab/↑: previous  Enter: submit  F1: help",
    }
}
