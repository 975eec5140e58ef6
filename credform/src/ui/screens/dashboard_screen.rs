use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DashboardState;
use crate::ui::{components::help_bar, layouts, theme};

pub fn render(f: &mut Frame, state: &DashboardState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    f.render_widget(
        Paragraph::new(Span::styled(" credform ", theme::title_style())),
        title_area,
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(theme::COLOR_POSITIVE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Destination: ", theme::help_text_style()),
            Span::raw(state.destination.path()),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Dashboard"));
    f.render_widget(body, content_area);

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_DASHBOARD);
}
