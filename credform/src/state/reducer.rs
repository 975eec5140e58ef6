use super::{AppState, DashboardState};
use crate::events::DataEvent;
use crate::notifications::Notifier;
use crate::ui::screens::Screen;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::SubmissionSettled {
            generation,
            settlement,
        } => {
            if !state.finish_submission(generation) {
                tracing::debug!("Discarding stale settlement for generation {}", generation);
                return;
            }

            for notice in settlement.notices {
                state.toasts.notify(notice);
            }

            if let Some(destination) = settlement.destination {
                tracing::info!("Navigating to {}", destination);
                state.navigate_to(Screen::Dashboard(DashboardState { destination }));
            }
        }
    }
}
