use crate::background::dispatch::Settlement;
use crate::state::{Mode, Role};

/// Commands to execute (user actions → state changes or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Form editing
    FocusNext,
    FocusPrevious,
    InsertChar(char),
    DeleteChar,
    ClearField,
    CycleRole { forward: bool },
    SelectRole(Role),

    // Mode toggle (the two panel triggers)
    SwitchMode(Mode),

    // Mode/role initializer
    ApplyLocation(String),

    // Submission
    Submit,

    // Notifications
    DismissToasts,

    // System
    ToggleHelp,
    Quit,
}

impl AppCommand {
    /// Commands whose payload may be secret text and must not be logged
    pub fn is_sensitive(&self) -> bool {
        matches!(self, AppCommand::InsertChar(_))
    }
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    SubmissionSettled {
        generation: u64,
        settlement: Settlement,
    },
}
