//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    FORM_WIDTH, HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT, TOAST_HEIGHT, TOAST_WIDTH,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Horizontally center a column of at most `FORM_WIDTH` cells
pub fn form_column(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Stack `heights` top to bottom inside `area`; the remainder is left unused
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let constraints = heights
        .iter()
        .map(|h| Constraint::Length(*h))
        .chain(std::iter::once(Constraint::Min(0)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    chunks[..heights.len()].to_vec()
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Slot `index` of the toast stack, counted down from the top-right corner.
/// Returns None once the stack would run off the bottom of `area`.
pub fn toast_slot(area: Rect, index: u16) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let y = area.y + 1 + index * TOAST_HEIGHT;
    if y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    Some(Rect::new(
        area.x + area.width - width,
        y,
        width,
        TOAST_HEIGHT,
    ))
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
