//! Navigation collaborator: incoming location parsing (mode/role
//! initializer) and outgoing destinations.

use crate::state::{AppState, Mode, Role};

/// Fixed suffix appended to the role to build the post-login destination
pub const DESTINATION_SUFFIX: &str = "-dashboard";

/// Logical location reached after a successful sign in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// `<role>-dashboard`; with no role selected this is just the suffix
    pub fn for_role(role: Option<Role>) -> Self {
        let prefix = role.map(|r| r.as_str()).unwrap_or("");
        Self(format!("{}{}", prefix, DESTINATION_SUFFIX))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The page location the form was opened with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    query: String,
}

impl Location {
    /// Accepts a full URL, a `?query`, or a bare `key=value` query
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let without_fragment = raw.split('#').next().unwrap_or("");
        let query = match without_fragment.split_once('?') {
            Some((_, query)) => query,
            // A bare path or URL without a query string
            None if !without_fragment.contains('=') => "",
            None => without_fragment,
        };

        Self {
            query: query.to_string(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// First `role` parameter, decoded
    pub fn role_param(&self) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(key, _)| key == "role")
            .map(|(_, value)| value.into_owned())
    }

    pub fn role(&self) -> Option<Role> {
        self.role_param().as_deref().and_then(Role::parse)
    }
}

/// Apply the mode/role initializer for `raw`.
///
/// Runs once per distinct query string: re-applying the same location is a
/// no-op. A recognized `role` selects it and switches to registration.
pub fn apply_location(state: &mut AppState, raw: &str) {
    let location = Location::parse(raw);

    if state.applied_location.as_deref() == Some(location.query()) {
        return;
    }
    state.applied_location = Some(location.query().to_string());

    match location.role() {
        Some(role) => {
            tracing::info!("Location selects role {}, opening registration", role.as_str());
            state.form.role = Some(role);
            state.form.switch_mode(Mode::Register);
        }
        None => {
            if let Some(param) = location.role_param() {
                tracing::debug!("Ignoring unrecognized role parameter {:?}", param);
            }
        }
    }
}
