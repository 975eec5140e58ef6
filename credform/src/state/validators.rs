use super::{FormState, Mode};

/// Exact length of a national ID
pub const NATIONAL_ID_LEN: usize = 13;

/// An email is accepted as soon as it contains `@`.
///
/// This is intentionally not an RFC 5322 check; the server owns real
/// validation.
pub fn email_valid(email: &str) -> bool {
    email.contains('@')
}

/// Exactly 13 ASCII digits
pub fn national_id_valid(id: &str) -> bool {
    id.len() == NATIONAL_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}

/// Strip every non-digit and cap the result at 13 characters
pub fn normalize_national_id(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(NATIONAL_ID_LEN)
        .collect()
}

/// Validity flags derived from the current form values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub email_valid: bool,
    pub national_id_valid: bool,
    pub passwords_match: bool,
    pub role_selected: bool,
}

impl Validity {
    pub fn of(form: &FormState) -> Self {
        Self {
            email_valid: email_valid(&form.email),
            national_id_valid: national_id_valid(&form.national_id),
            passwords_match: passwords_match(&form.password, &form.confirm_password),
            role_selected: form.role.is_some(),
        }
    }

    pub fn all(&self) -> bool {
        self.email_valid && self.national_id_valid && self.passwords_match && self.role_selected
    }

    /// Inline hints shown under the registration form
    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints = vec![];
        if !self.email_valid {
            hints.push("Invalid email address");
        }
        if !self.national_id_valid {
            hints.push("National ID must be exactly 13 digits");
        }
        if !self.passwords_match {
            hints.push("Passwords do not match");
        }
        hints
    }
}

/// Registration requires every flag; authentication is never gated here
pub fn can_submit(form: &FormState) -> bool {
    match form.mode {
        Mode::Register => Validity::of(form).all(),
        Mode::Authenticate => true,
    }
}
