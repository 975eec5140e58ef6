//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

use crate::notifications::NoticeLevel;

// =============================================================================
// Colors
// =============================================================================

/// Color for success notices and the signed-in screen
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for failure notices and invalid fields
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Border color for the focused input
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Border color for inputs without focus
pub const COLOR_INPUT_IDLE: Color = Color::DarkGray;

/// Color for a disabled submit button
pub const COLOR_DISABLED: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of a bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the submit button row
pub const BUTTON_HEIGHT: u16 = 3;

/// Width of the centered form column
pub const FORM_WIDTH: u16 = 60;

/// Width of a toast
pub const TOAST_WIDTH: u16 = 48;

/// Height of a toast (one line of text plus borders)
pub const TOAST_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for screen titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Border style of a form input given its focus and validity
pub fn input_border_style(focused: bool, invalid: bool) -> Style {
    let color = if invalid {
        COLOR_NEGATIVE
    } else if focused {
        COLOR_INPUT_FOCUSED
    } else {
        COLOR_INPUT_IDLE
    };
    let style = Style::default().fg(color);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Style for the active mode tab
pub fn active_tab_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for the inactive mode tab
pub fn inactive_tab_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for the submit button
pub fn button_style(enabled: bool, focused: bool) -> Style {
    if !enabled {
        return Style::default().fg(COLOR_DISABLED);
    }
    let style = Style::default().fg(COLOR_POSITIVE).add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Style for inline validation hints
pub fn hint_style() -> Style {
    Style::default().fg(COLOR_NEGATIVE)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for table-like key column in help
pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

// =============================================================================
// Notice Color Helper
// =============================================================================

/// Success = green, failure = red
pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => COLOR_POSITIVE,
        NoticeLevel::Failure => COLOR_NEGATIVE,
    }
}
