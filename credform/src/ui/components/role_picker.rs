use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Role;
use crate::ui::theme;

/// Radio-style picker for the account role
pub fn render_role_picker(
    f: &mut Frame,
    area: Rect,
    selected: Option<Role>,
    is_focused: bool,
    is_invalid: bool,
) {
    let border_style = theme::input_border_style(is_focused, is_invalid);

    let mut spans = vec![];
    for role in Role::ALL {
        let checked = selected == Some(role);
        let marker = if checked { "(•) " } else { "( ) " };
        let style = if checked {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            theme::help_text_style()
        };
        spans.push(Span::styled(format!("{}{}", marker, role.display_name()), style));
        spans.push(Span::raw("   "));
    }

    let picker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Role ", border_style)),
    );

    f.render_widget(picker, area);
}
