use crate::background::dispatch::Submission;
use crate::background::gateway::AuthGateway;
use crate::background::submitter::Submitter;
use crate::background::{BackgroundTaskManager, SUBMIT_TASK_ID};
use crate::events::AppCommand;
use crate::navigation;
use crate::state::*;

/// Execute a command, spawning the submission task when needed
pub fn execute_command<G: AuthGateway>(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    submitter: &Submitter<G>,
) {
    match command {
        AppCommand::Submit => {
            if let Some((generation, submission)) = begin_submission(state) {
                let submitter = submitter.clone();
                let future = async move {
                    submitter.submit(generation, submission).await;
                };
                task_manager.spawn_task(SUBMIT_TASK_ID, future);
            }
        }

        other => execute_command_sync(other, state),
    }
}

/// Execute a command synchronously without spawning tasks.
///
/// `Submit` still marks the submission in flight so the guard can be
/// exercised; the request itself is never sent.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        // Form editing
        AppCommand::FocusNext => state.form.focus_next(),
        AppCommand::FocusPrevious => state.form.focus_previous(),
        AppCommand::InsertChar(c) => state.form.insert_char(c),
        AppCommand::DeleteChar => state.form.delete_char(),
        AppCommand::ClearField => state.form.clear_field(),
        AppCommand::CycleRole { forward } => {
            state.form.role = Role::cycle(state.form.role, forward);
        }
        AppCommand::SelectRole(role) => state.form.role = Some(role),

        // Mode toggle
        AppCommand::SwitchMode(mode) => state.form.switch_mode(mode),

        // Initializer
        AppCommand::ApplyLocation(raw) => navigation::apply_location(state, &raw),

        // Submission
        AppCommand::Submit => {
            begin_submission(state);
        }

        // Notifications
        AppCommand::DismissToasts => state.toasts.clear(),

        // System
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::Quit => state.should_quit = true,
    }
}

/// Apply the submit guards and, if they pass, mark a new generation in
/// flight and snapshot the form into a request.
pub fn begin_submission(state: &mut AppState) -> Option<(u64, Submission)> {
    if state.submission.is_in_flight() {
        tracing::debug!("Submit ignored: a submission is already in flight");
        return None;
    }
    if !state.form.can_submit() {
        tracing::debug!("Submit ignored: form is not valid for {:?}", state.form.mode);
        return None;
    }

    let submission = Submission::from_form(&state.form);
    let generation = state.start_submission();
    Some((generation, submission))
}
