use anyhow::Result;
use credform_api::{Client, Endpoints};
use credform_session::{PersistentStore, SessionStore, Settings};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::dispatch::Stores;
use crate::background::gateway::AuthGateway;
use crate::background::submitter::Submitter;
use crate::background::BackgroundTaskManager;
use crate::commands::executor;
use crate::events::AppCommand;
use crate::input::KeyEvent;
use crate::logging;
use crate::state::AppState;

/// Production handler: submissions run as background tasks
struct LiveHandler<G: AuthGateway> {
    task_manager: BackgroundTaskManager,
    submitter: Submitter<G>,
}

impl<G: AuthGateway> DataEventHandler for LiveHandler<G> {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if command.is_sensitive() {
            tracing::trace!("Executing text input command");
        } else {
            tracing::info!("Executing command: {:?}", command);
        }
        executor::execute_command(command, state, &mut self.task_manager, &self.submitter);
    }
}

pub struct App {
    settings: Settings,
    location: Option<String>,
}

impl App {
    /// `location` is the navigation location the form was opened at, if any
    pub fn new(settings: Settings, location: Option<String>) -> Self {
        Self { settings, location }
    }

    pub async fn run(&self) -> Result<()> {
        let (log_path, _log_guard) = logging::init_logging(&logging::default_logs_dir()?)?;

        tracing::info!("credform starting, logging to {}", log_path.display());

        let endpoints = Endpoints {
            signup: self.settings.signup_path.clone(),
            login: self.settings.login_path.clone(),
        };
        let client = Client::new(&self.settings.server_url, &endpoints)?;
        tracing::info!(
            "Using sign up endpoint {} and sign in endpoint {}",
            client.signup_url(),
            client.login_url()
        );

        let persisted = match &self.settings.storage_dir {
            Some(dir) => PersistentStore::in_dir(dir.clone())?,
            None => PersistentStore::new()?,
        };
        tracing::debug!("Persisted store at {}", persisted.path().display());
        let stores = Stores::new(Arc::new(SessionStore::new()), Arc::new(persisted))?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let submitter = Submitter::new(Arc::new(client), stores, data_tx);

        let mut core = AppCore::new(LiveHandler {
            task_manager: BackgroundTaskManager::new(),
            submitter,
        });

        core.open_location(self.location.as_deref().unwrap_or(""));

        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.tick();
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            if let Some(key) = KeyEvent::from_crossterm(key) {
                                // Typed characters may be password text
                                if !key.is_text() {
                                    tracing::debug!("Key press: {:?}", key);
                                }
                                core.handle_key(key);
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        core.handler_mut().task_manager.cancel_all();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
