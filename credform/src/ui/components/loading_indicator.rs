use ratatui::{layout::Rect, Frame};

use crate::state::SubmissionState;

/// Render a spinner while a submission is in flight
pub fn render_loading_indicator(f: &mut Frame, area: Rect, submission: &SubmissionState) {
    if let SubmissionState::InFlight { throbber, .. } = submission {
        let simple = throbber_widgets_tui::Throbber::default()
            .throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
        f.render_stateful_widget(simple, area, &mut throbber.clone());
    }
}
