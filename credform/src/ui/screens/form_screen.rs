use ratatui::{
    layout::Alignment,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::validators::Validity;
use crate::state::{FormField, FormState, Mode, SubmissionState};
use crate::ui::{
    components::{help_bar, loading_indicator, role_picker, text_input::TextInput},
    layouts, theme,
};

pub fn render(f: &mut Frame, form: &FormState, submission: &SubmissionState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    render_title(f, title_area, form.mode, submission);
    render_content(f, layouts::form_column(content_area), form, submission);

    let help = if submission.is_in_flight() {
        help_bar::HELP_TEXT_IN_FLIGHT
    } else {
        help_bar::form_help_text(form)
    };
    help_bar::render_help_bar(f, help_area, help);
}

fn render_title(f: &mut Frame, area: Rect, mode: Mode, submission: &SubmissionState) {
    let (text_area, indicator_area) = layouts::title_with_loading(area);

    let tabs = Line::from(vec![
        Span::styled(" credform ", theme::title_style()),
        Span::raw("  "),
        mode_tab(Mode::Register, mode),
        Span::raw(" "),
        mode_tab(Mode::Authenticate, mode),
    ]);
    f.render_widget(Paragraph::new(tabs), text_area);

    loading_indicator::render_loading_indicator(f, indicator_area, submission);
}

fn mode_tab(tab: Mode, active: Mode) -> Span<'static> {
    let (text, style) = if tab == active {
        (format!(" {} ", tab.label()), theme::active_tab_style())
    } else {
        let chord = match tab {
            Mode::Register => "^N",
            Mode::Authenticate => "^L",
        };
        (format!(" {} {} ", tab.label(), chord), theme::inactive_tab_style())
    };
    Span::styled(text, style)
}

fn render_content(f: &mut Frame, area: Rect, form: &FormState, submission: &SubmissionState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style())
        .title(Span::styled(format!(" {} ", form.mode.title()), theme::title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let validity = form.validity();
    let hints = visible_hints(form, &validity);
    let fields = form.visible_fields();

    let mut heights: Vec<u16> = fields
        .iter()
        .map(|field| match field {
            FormField::Submit => theme::BUTTON_HEIGHT,
            _ => theme::INPUT_HEIGHT,
        })
        .collect();
    heights.push(hints.len() as u16);

    let rects = layouts::stack(inner, &heights);

    for (field, rect) in fields.iter().zip(rects.iter()) {
        let focused = form.focus == *field;
        let invalid = field_invalid(form, &validity, *field);

        match field {
            FormField::Role => {
                role_picker::render_role_picker(f, *rect, form.role, focused, invalid);
            }
            FormField::Submit => render_submit(f, *rect, form, submission, focused),
            text_field => {
                TextInput::new(text_field.label(), form.field_value(*text_field).unwrap_or(""))
                    .focused(focused && !submission.is_in_flight())
                    .secret(text_field.is_secret())
                    .invalid(invalid)
                    .render(f, *rect);
            }
        }
    }

    if let Some(hint_area) = rects.last() {
        let lines: Vec<Line> = hints
            .iter()
            .map(|hint| Line::from(Span::styled(*hint, theme::hint_style())))
            .collect();
        f.render_widget(Paragraph::new(lines), *hint_area);
    }
}

fn render_submit(
    f: &mut Frame,
    area: Rect,
    form: &FormState,
    submission: &SubmissionState,
    focused: bool,
) {
    let in_flight = submission.is_in_flight();
    let enabled = form.can_submit() && !in_flight;

    let text = if in_flight {
        format!("{}...", form.mode.label())
    } else {
        form.mode.label().to_string()
    };

    let button = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme::button_style(enabled, focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::input_border_style(focused, false)),
        );
    f.render_widget(button, area);
}

/// Whether `field` is styled invalid. Empty email and national ID are not
/// flagged; a password mismatch marks both password fields.
fn field_invalid(form: &FormState, validity: &Validity, field: FormField) -> bool {
    let touched = form.field_value(field).is_some_and(|v| !v.is_empty());
    match (field, form.mode) {
        // Email is checked in both modes
        (FormField::Email, _) => touched && !validity.email_valid,
        (FormField::NationalId, Mode::Register) => touched && !validity.national_id_valid,
        (FormField::Password | FormField::ConfirmPassword, Mode::Register) => {
            !validity.passwords_match
        }
        _ => false,
    }
}

/// Inline hints for the registration form, limited to fields with input
fn visible_hints(form: &FormState, validity: &Validity) -> Vec<&'static str> {
    if form.mode != Mode::Register {
        return vec![];
    }

    let mut shown = *validity;
    if form.email.is_empty() {
        shown.email_valid = true;
    }
    if form.national_id.is_empty() {
        shown.national_id_valid = true;
    }
    shown.hints()
}
