use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let (width, height) = layouts::popup_sizes::LARGE;
    let area = layouts::centered_popup(width, height, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (press ? or Esc to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::key_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match screen {
        Screen::Form => {
            items.push(("Tab/↓", "Next field"));
            items.push(("Shift+Tab/↑", "Previous field"));
            items.push(("Type", "Enter text into the focused field"));
            items.push(("Backspace", "Delete last character"));
            items.push(("Ctrl+U", "Clear the focused field"));
            items.push(("←/→/Space", "Cycle role (on the role field)"));
            items.push(("c / a", "Pick customer / agent (on the role field)"));
            items.push(("Enter", "Submit"));
            items.push(("Ctrl+N", "Switch to Sign Up"));
            items.push(("Ctrl+L", "Switch to Sign In"));
            items.push(("Esc", "Cancel submission, dismiss notices, or quit"));
        }
        Screen::Dashboard(..) => {
            items.push(("q/Esc", "Quit"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("?/F1", "Toggle this help"));
    items.push(("Ctrl+C", "Quit application"));

    items
}
