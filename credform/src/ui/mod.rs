pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    match state.current_screen() {
        Screen::Form => {
            form_screen::render(f, &state.form, &state.submission);
        }
        Screen::Dashboard(dashboard_state) => {
            dashboard_screen::render(f, dashboard_state);
        }
    }

    // Toasts float above the screen
    components::toast_stack::render_toasts(f, &state.toasts);

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
