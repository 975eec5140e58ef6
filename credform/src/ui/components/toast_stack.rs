use ratatui::{
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::notifications::{NoticeLevel, ToastQueue};
use crate::ui::{layouts, theme};

/// Render toasts in the top-right corner, newest first
pub fn render_toasts(f: &mut Frame, toasts: &ToastQueue) {
    let area = f.area();

    for (index, toast) in toasts.iter().rev().enumerate() {
        let Some(slot) = layouts::toast_slot(area, index as u16) else {
            break;
        };

        let color = theme::notice_color(toast.notice.level);
        let title = match toast.notice.level {
            NoticeLevel::Success => " Success ",
            NoticeLevel::Failure => " Error ",
        };

        f.render_widget(Clear, slot);
        let body = Paragraph::new(toast.notice.message.as_str())
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            );
        f.render_widget(body, slot);
    }
}
