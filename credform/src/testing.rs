use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use credform_api::{LoginRequest, LoginResponse, MessageResponse, Reply, SignupRequest};
use credform_session::{KeyValueStore, SessionError, StoreScope};

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::dispatch::{dispatch, Stores, Submission};
use crate::background::gateway::AuthGateway;
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through `execute_command_sync`. Submissions that pass the
/// guards are queued instead of sent, so a test decides when and how they
/// settle.
#[derive(Default)]
pub struct MockDataHandler {
    pending: VecDeque<(u64, Submission)>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        match command {
            AppCommand::Submit => {
                if let Some(pending) = executor::begin_submission(state) {
                    self.pending.push_back(pending);
                }
            }
            other => executor::execute_command_sync(other, state),
        }
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// Create a test app opened at the given location
    pub fn at_location(raw: &str) -> Self {
        let mut app = Self::new();
        app.core.open_location(raw);
        app
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the focused field
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn execute(&mut self, command: AppCommand) {
        self.core.execute(command);
    }

    /// Inject a data event (simulate a settled submission)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Number of queued submissions that have not settled yet
    pub fn pending_submissions(&mut self) -> usize {
        self.core.handler_mut().pending_len()
    }

    /// Dispatch the oldest queued submission and feed its settlement back.
    /// Returns false if nothing was queued.
    pub async fn settle_next<G: AuthGateway>(&mut self, gateway: &G, stores: &Stores) -> bool {
        let Some((generation, submission)) = self.core.handler_mut().pending.pop_front() else {
            return false;
        };
        let settlement = dispatch(gateway, stores, submission).await;
        self.core.handle_data_event(DataEvent::SubmissionSettled {
            generation,
            settlement,
        });
        true
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Assert that the app is on a specific screen type
    ///
    /// Uses discriminant comparison to check screen type without
    /// requiring full equality of state.
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport failure raised by [`MockGateway`]
#[derive(Debug, Clone, PartialEq)]
pub struct MockTransportError(String);

impl MockTransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for MockTransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub type MockOutcome<T> = Result<Reply<T>, MockTransportError>;

/// Gateway that replays scripted outcomes in order
#[derive(Default)]
pub struct MockGateway {
    register_outcomes: Mutex<VecDeque<MockOutcome<MessageResponse>>>,
    authenticate_outcomes: Mutex<VecDeque<MockOutcome<LoginResponse>>>,
    register_calls: AtomicUsize,
    authenticate_calls: AtomicUsize,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_to_register(self, outcome: MockOutcome<MessageResponse>) -> Self {
        if let Ok(mut outcomes) = self.register_outcomes.lock() {
            outcomes.push_back(outcome);
        }
        self
    }

    pub fn respond_to_authenticate(self, outcome: MockOutcome<LoginResponse>) -> Self {
        if let Ok(mut outcomes) = self.authenticate_outcomes.lock() {
            outcomes.push_back(outcome);
        }
        self
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn authenticate_calls(&self) -> usize {
        self.authenticate_calls.load(Ordering::SeqCst)
    }
}

fn next_outcome<T>(outcomes: &Mutex<VecDeque<MockOutcome<T>>>) -> MockOutcome<T> {
    outcomes
        .lock()
        .ok()
        .and_then(|mut queue| queue.pop_front())
        .unwrap_or_else(|| Err(MockTransportError::new("no scripted reply")))
}

impl AuthGateway for MockGateway {
    type Error = MockTransportError;

    async fn register(&self, _request: &SignupRequest) -> MockOutcome<MessageResponse> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        next_outcome(&self.register_outcomes)
    }

    async fn authenticate(&self, _request: &LoginRequest) -> MockOutcome<LoginResponse> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        next_outcome(&self.authenticate_outcomes)
    }
}

/// Key/value store that records every write
pub struct RecordingStore {
    scope: StoreScope,
    fail_writes: bool,
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    pub fn session() -> Self {
        Self::with_scope(StoreScope::Session)
    }

    pub fn persisted() -> Self {
        Self::with_scope(StoreScope::Persisted)
    }

    fn with_scope(scope: StoreScope) -> Self {
        Self {
            scope,
            fail_writes: false,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Make every `set` fail
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl KeyValueStore for RecordingStore {
    fn scope(&self) -> StoreScope {
        self.scope
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.fail_writes {
            return Err(SessionError::Storage("disk full".to_string()));
        }
        self.writes
            .lock()
            .map_err(|_| SessionError::Storage("recording store lock poisoned".to_string()))?
            .push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self
            .writes()
            .into_iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v))
    }
}
