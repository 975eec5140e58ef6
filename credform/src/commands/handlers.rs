use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: Ctrl chords work everywhere
    if event.ctrl {
        return match (state.current_screen(), key) {
            (_, Key::Char('c')) => Some(AppCommand::Quit),
            (Screen::Form, Key::Char('n')) => Some(AppCommand::SwitchMode(Mode::Register)),
            (Screen::Form, Key::Char('l')) => Some(AppCommand::SwitchMode(Mode::Authenticate)),
            (Screen::Form, Key::Char('u')) => Some(AppCommand::ClearField),
            _ => None,
        };
    }

    if key == Key::F(1) {
        return Some(AppCommand::ToggleHelp);
    }

    // Priority 2: Help popup swallows everything else
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            _ => None,
        };
    }

    match state.current_screen() {
        Screen::Form => handle_form_keys(key, state),
        Screen::Dashboard(_) => match key {
            Key::Char('?') => Some(AppCommand::ToggleHelp),
            Key::Char('q') | Key::Esc => Some(AppCommand::Quit),
            _ => None,
        },
    }
}

fn handle_form_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    let form = &state.form;

    // Keys shared by every field
    match key {
        // A submission in flight always runs to completion
        Key::Esc => {
            return if !state.toasts.is_empty() {
                Some(AppCommand::DismissToasts)
            } else if state.submission.is_in_flight() {
                None
            } else {
                Some(AppCommand::Quit)
            };
        }
        Key::Enter => return Some(AppCommand::Submit),
        Key::Tab | Key::Down => return Some(AppCommand::FocusNext),
        Key::BackTab | Key::Up => return Some(AppCommand::FocusPrevious),
        _ => {}
    }

    match form.focus {
        FormField::Role => match key {
            Key::Left => Some(AppCommand::CycleRole { forward: false }),
            Key::Right | Key::Char(' ') => Some(AppCommand::CycleRole { forward: true }),
            Key::Char('c') => Some(AppCommand::SelectRole(Role::Customer)),
            Key::Char('a') => Some(AppCommand::SelectRole(Role::Agent)),
            Key::Char('?') => Some(AppCommand::ToggleHelp),
            _ => None,
        },
        FormField::Submit => match key {
            Key::Char(' ') => Some(AppCommand::Submit),
            Key::Char('?') => Some(AppCommand::ToggleHelp),
            _ => None,
        },
        _ => match key {
            Key::Backspace => Some(AppCommand::DeleteChar),
            Key::Char(c) => Some(AppCommand::InsertChar(c)),
            _ => None,
        },
    }
}
