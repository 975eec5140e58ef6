use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = real tasks, test = mock)
///
/// This trait abstracts the side effects of command execution, allowing tests
/// to inject a mock implementation that doesn't spawn background tasks or make API calls.
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
///
/// Generic over H (handler). The handler type determines how commands are
/// executed: in production it spawns the submission task, in tests it
/// updates state synchronously.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    /// Create a new application core with the given handler
    pub fn new(handler: H) -> Self {
        Self {
            ui_state: AppState::new(),
            handler,
        }
    }

    /// Run the mode/role initializer for the location the form was opened with
    pub fn open_location(&mut self, raw: &str) {
        self.execute(AppCommand::ApplyLocation(raw.to_string()));
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.execute(command);
        }
    }

    /// Execute a command directly, bypassing key mapping
    pub fn execute(&mut self, command: AppCommand) {
        self.handler
            .execute_with_context(command, &mut self.ui_state);
    }

    /// Handle a data event (for test injection or async results)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Advance one UI tick
    pub fn tick(&mut self) {
        self.ui_state.tick();
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
