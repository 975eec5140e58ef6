pub mod reducer;
pub mod validators;

use crate::notifications::ToastQueue;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;
use validators::Validity;

/// Whether the form creates an account or verifies credentials
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Register,
    #[default]
    Authenticate,
}

impl Mode {
    /// Label used on buttons and in transport failure notices
    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Sign Up",
            Self::Authenticate => "Sign In",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Create Account",
            Self::Authenticate => "Sign In",
        }
    }
}

/// Caller-selected account category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Agent,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Customer, Role::Agent];

    /// Wire and routing representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Agent => "agent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Agent => "Agent",
        }
    }

    /// Exact, case-sensitive match against the recognized role values
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Cycle through none -> customer -> agent -> none
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        match (current, forward) {
            (None, true) => Some(Self::Customer),
            (Some(Self::Customer), true) => Some(Self::Agent),
            (Some(Self::Agent), true) => None,
            (None, false) => Some(Self::Agent),
            (Some(Self::Agent), false) => Some(Self::Customer),
            (Some(Self::Customer), false) => None,
        }
    }
}

/// Focusable elements of the credential form
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    #[default]
    Email,
    NationalId,
    Password,
    ConfirmPassword,
    Role,
    Submit,
}

const REGISTER_FIELDS: [FormField; 7] = [
    FormField::Name,
    FormField::Email,
    FormField::NationalId,
    FormField::Password,
    FormField::ConfirmPassword,
    FormField::Role,
    FormField::Submit,
];

const AUTHENTICATE_FIELDS: [FormField; 4] = [
    FormField::Email,
    FormField::Password,
    FormField::Role,
    FormField::Submit,
];

impl FormField {
    /// Fields shown in the given mode, in focus order
    pub fn visible_in(mode: Mode) -> &'static [FormField] {
        match mode {
            Mode::Register => &REGISTER_FIELDS,
            Mode::Authenticate => &AUTHENTICATE_FIELDS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::NationalId => "National ID",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Role => "Role",
            Self::Submit => "Submit",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Role | Self::Submit)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Values entered into the credential form
///
/// Validity is never stored here; it is derived on demand from the current
/// values via [`FormState::validity`].
#[derive(Clone, Default, PartialEq)]
pub struct FormState {
    pub mode: Mode,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub focus: FormField,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("mode", &self.mode)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("national_id", &self.national_id)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("role", &self.role)
            .field("focus", &self.focus)
            .finish()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible_fields(&self) -> &'static [FormField] {
        FormField::visible_in(self.mode)
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    pub fn focus_previous(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if index == 0 {
            fields[fields.len() - 1]
        } else {
            fields[index - 1]
        };
    }

    /// Switch mode without touching any entered value
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!("Switching form mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;

        // Keep focus on a field that exists in the new mode
        if !self.visible_fields().contains(&self.focus) {
            self.focus = FormField::Email;
        }
    }

    pub fn field_value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::NationalId => Some(&self.national_id),
            FormField::Password => Some(&self.password),
            FormField::ConfirmPassword => Some(&self.confirm_password),
            FormField::Role | FormField::Submit => None,
        }
    }

    fn field_value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::NationalId => Some(&mut self.national_id),
            FormField::Password => Some(&mut self.password),
            FormField::ConfirmPassword => Some(&mut self.confirm_password),
            FormField::Role | FormField::Submit => None,
        }
    }

    /// Append a character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let focus = self.focus;
        if let Some(value) = self.field_value_mut(focus) {
            value.push(c);
        }
        if focus == FormField::NationalId {
            let raw = std::mem::take(&mut self.national_id);
            self.set_national_id(&raw);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(value) = self.field_value_mut(self.focus) {
            value.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(value) = self.field_value_mut(self.focus) {
            value.clear();
        }
    }

    /// Store a national ID, keeping digits only and at most 13 of them
    pub fn set_national_id(&mut self, raw: &str) {
        self.national_id = validators::normalize_national_id(raw);
    }

    pub fn validity(&self) -> Validity {
        Validity::of(self)
    }

    pub fn can_submit(&self) -> bool {
        validators::can_submit(self)
    }
}

/// Lifecycle of the single allowed submission
#[derive(Default, Debug, Clone, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight {
        generation: u64,
        mode: Mode,
        throbber: ThrobberState,
    },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }
}

/// Data backing the post-authentication screen
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub destination: crate::navigation::Destination,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Form
    pub form: FormState,
    pub submission: SubmissionState,
    pub last_generation: u64,

    // Navigation location last applied by the initializer
    pub applied_location: Option<String>,

    // UI state
    pub toasts: ToastQueue,
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Form],

            form: FormState::new(),
            submission: SubmissionState::Idle,
            last_generation: 0,

            applied_location: None,

            toasts: ToastQueue::default(),
            help_visible: false,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Mark a submission as started and return its generation
    pub fn start_submission(&mut self) -> u64 {
        self.last_generation += 1;
        self.submission = SubmissionState::InFlight {
            generation: self.last_generation,
            mode: self.form.mode,
            throbber: ThrobberState::default(),
        };
        self.last_generation
    }

    /// Return to idle if `generation` is the one in flight.
    /// Returns false for stale generations.
    pub fn finish_submission(&mut self, generation: u64) -> bool {
        match self.submission {
            SubmissionState::InFlight { generation: current, .. } if current == generation => {
                self.submission = SubmissionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Advance time-based UI state (spinner frames, toast expiry)
    pub fn tick(&mut self) {
        if let SubmissionState::InFlight { throbber, .. } = &mut self.submission {
            throbber.calc_next();
        }
        self.toasts.tick();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
