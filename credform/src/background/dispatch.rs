use credform_api::{LoginRequest, LoginResponse, Reply, SignupRequest};
use credform_session::{KeyValueStore, SessionError, StoreScope, TOKEN_KEY, USER_ID_KEY};
use secrecy::SecretString;
use std::sync::Arc;

use super::gateway::AuthGateway;
use crate::navigation::Destination;
use crate::notifications::Notice;
use crate::state::{FormState, Mode, Role};

/// Request built from the form at the moment of submission
#[derive(Debug)]
pub enum Submission {
    Register(SignupRequest),
    Authenticate {
        request: LoginRequest,
        role: Option<Role>,
    },
}

impl Submission {
    /// Snapshot the form into the payload for its current mode
    pub fn from_form(form: &FormState) -> Self {
        let role = form.role.map(|r| r.as_str()).unwrap_or("");
        let password = SecretString::from(form.password.clone());

        match form.mode {
            Mode::Register => Submission::Register(
                SignupRequest::new()
                    .name(form.name.clone())
                    .email(form.email.clone())
                    .national_id(form.national_id.clone())
                    .password(password)
                    .role(role),
            ),
            Mode::Authenticate => Submission::Authenticate {
                request: LoginRequest::new()
                    .email(form.email.clone())
                    .password(password)
                    .role(role),
                role: form.role,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Submission::Register(_) => Mode::Register,
            Submission::Authenticate { .. } => Mode::Authenticate,
        }
    }
}

/// What one submission attempt produced, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settlement {
    pub notices: Vec<Notice>,
    pub destination: Option<Destination>,
}

impl Settlement {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            destination: None,
        }
    }
}

/// Session-scoped and persisted storage ports
#[derive(Clone)]
pub struct Stores {
    pub session: Arc<dyn KeyValueStore>,
    pub persisted: Arc<dyn KeyValueStore>,
}

impl Stores {
    /// Fails if either port has the wrong lifetime for its role
    pub fn new(
        session: Arc<dyn KeyValueStore>,
        persisted: Arc<dyn KeyValueStore>,
    ) -> Result<Self, SessionError> {
        for (role, store, expected) in [
            ("session", &session, StoreScope::Session),
            ("persisted", &persisted, StoreScope::Persisted),
        ] {
            if store.scope() != expected {
                return Err(SessionError::Configuration(format!(
                    "{} store has scope {:?}, expected {:?}",
                    role,
                    store.scope(),
                    expected
                )));
            }
        }
        Ok(Self { session, persisted })
    }
}

/// Send one submission and interpret the outcome.
///
/// Single attempt, no retry. Storage writes only happen after an accepted
/// authentication; every other path only produces notices.
pub async fn dispatch<G: AuthGateway>(
    gateway: &G,
    stores: &Stores,
    submission: Submission,
) -> Settlement {
    let mode = submission.mode();

    match submission {
        Submission::Register(request) => match gateway.register(&request).await {
            Ok(Reply::Accepted(body)) => {
                tracing::info!("Registration accepted");
                Settlement::notice(Notice::success(body.message))
            }
            Ok(Reply::Rejected { status, message }) => {
                tracing::warn!("Registration rejected with status {}", status);
                Settlement::notice(Notice::failure(message))
            }
            Err(e) => transport_failure(mode, &e),
        },
        Submission::Authenticate { request, role } => {
            match gateway.authenticate(&request).await {
                Ok(Reply::Accepted(body)) => complete_authentication(stores, body, role),
                Ok(Reply::Rejected { status, message }) => {
                    tracing::warn!("Sign in rejected with status {}", status);
                    Settlement::notice(Notice::failure(message))
                }
                Err(e) => transport_failure(mode, &e),
            }
        }
    }
}

fn transport_failure(mode: Mode, error: &impl std::fmt::Display) -> Settlement {
    tracing::error!("{} request failed: {}", mode.label(), error);
    Settlement::notice(Notice::failure(format!("{} Error: {}", mode.label(), error)))
}

fn complete_authentication(stores: &Stores, body: LoginResponse, role: Option<Role>) -> Settlement {
    tracing::info!("Sign in accepted");
    let mut settlement = Settlement::notice(Notice::success(body.message.clone()));

    if let Err(e) = record_credentials(stores, &body) {
        tracing::error!("Failed to record credentials: {}", e);
        settlement.notices.push(Notice::failure(format!(
            "{} Error: {}",
            Mode::Authenticate.label(),
            e
        )));
        return settlement;
    }

    settlement.destination = Some(Destination::for_role(role));
    settlement
}

fn record_credentials(stores: &Stores, body: &LoginResponse) -> Result<(), SessionError> {
    if let Some(user_id) = body.user_id() {
        stores.session.set(USER_ID_KEY, user_id)?;
    }
    // Written even when the server omitted the token
    stores.persisted.set(TOKEN_KEY, &body.token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NoticeLevel;
    use crate::testing::{MockGateway, MockTransportError, RecordingStore};
    use credform_api::{MessageResponse, UserRef};

    fn stores() -> (Arc<RecordingStore>, Arc<RecordingStore>, Stores) {
        let session = Arc::new(RecordingStore::session());
        let persisted = Arc::new(RecordingStore::persisted());
        let stores = Stores::new(session.clone(), persisted.clone()).unwrap();
        (session, persisted, stores)
    }

    fn login_form(role: Option<Role>) -> FormState {
        FormState {
            email: "a@b".to_string(),
            password: "pw".to_string(),
            role,
            ..Default::default()
        }
    }

    fn accepted_login(token: &str, user_id: Option<&str>) -> Reply<LoginResponse> {
        Reply::Accepted(LoginResponse {
            message: "ok".to_string(),
            token: token.to_string(),
            user: user_id.map(|id| UserRef {
                id: Some(id.to_string()),
            }),
        })
    }

    #[test]
    fn stores_reject_swapped_ports() {
        let session: Arc<dyn KeyValueStore> = Arc::new(RecordingStore::session());
        let persisted: Arc<dyn KeyValueStore> = Arc::new(RecordingStore::persisted());

        assert!(Stores::new(session.clone(), persisted.clone()).is_ok());
        let err = Stores::new(persisted, session).err().unwrap();
        assert!(err.to_string().contains("session store has scope Persisted"));
    }

    #[test]
    fn register_payload_includes_every_field() {
        let form = FormState {
            mode: Mode::Register,
            name: "Ada".to_string(),
            email: "x@y.com".to_string(),
            national_id: "1234567890123".to_string(),
            password: "pw1".to_string(),
            confirm_password: "pw1".to_string(),
            role: Some(Role::Customer),
            ..Default::default()
        };

        let Submission::Register(request) = Submission::from_form(&form) else {
            panic!("expected register submission");
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "name": "Ada",
                "email": "x@y.com",
                "nationalId": "1234567890123",
                "password": "pw1",
                "role": "customer",
            })
        );
    }

    #[test]
    fn authenticate_payload_sends_empty_role_when_unselected() {
        let submission = Submission::from_form(&login_form(None));
        assert_eq!(submission.mode(), Mode::Authenticate);

        let Submission::Authenticate { request, role } = submission else {
            panic!("expected authenticate submission");
        };
        assert_eq!(role, None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "email": "a@b", "password": "pw", "role": "" })
        );
    }

    #[tokio::test]
    async fn accepted_sign_in_records_credentials_and_navigates() {
        let (session, persisted, stores) = stores();
        let gateway = MockGateway::new().respond_to_authenticate(Ok(accepted_login("T1", Some("U1"))));

        let settlement = dispatch(
            &gateway,
            &stores,
            Submission::from_form(&login_form(Some(Role::Customer))),
        )
        .await;

        assert_eq!(session.get(USER_ID_KEY).unwrap(), Some("U1".to_string()));
        assert_eq!(persisted.get(TOKEN_KEY).unwrap(), Some("T1".to_string()));
        assert_eq!(settlement.notices, vec![Notice::success("ok")]);
        assert_eq!(
            settlement.destination.as_ref().map(|d| d.path()),
            Some("customer-dashboard")
        );
    }

    #[tokio::test]
    async fn token_is_persisted_even_without_user() {
        let (session, persisted, stores) = stores();
        let gateway = MockGateway::new().respond_to_authenticate(Ok(accepted_login("T9", None)));

        let settlement = dispatch(
            &gateway,
            &stores,
            Submission::from_form(&login_form(Some(Role::Agent))),
        )
        .await;

        assert!(session.writes().is_empty());
        assert_eq!(persisted.writes(), vec![(TOKEN_KEY.to_string(), "T9".to_string())]);
        assert_eq!(
            settlement.destination,
            Some(Destination::for_role(Some(Role::Agent)))
        );
    }

    #[tokio::test]
    async fn rejected_sign_in_only_notifies() {
        let (session, persisted, stores) = stores();
        let gateway = MockGateway::new().respond_to_authenticate(Ok(Reply::Rejected {
            status: 401,
            message: "bad credentials".to_string(),
        }));

        let settlement = dispatch(
            &gateway,
            &stores,
            Submission::from_form(&login_form(Some(Role::Customer))),
        )
        .await;

        assert_eq!(settlement.notices, vec![Notice::failure("bad credentials")]);
        assert_eq!(settlement.destination, None);
        assert!(session.writes().is_empty());
        assert!(persisted.writes().is_empty());
    }

    #[tokio::test]
    async fn register_transport_failure_names_the_mode() {
        let (session, persisted, stores) = stores();
        let gateway = MockGateway::new()
            .respond_to_register(Err(MockTransportError::new("connection refused")));
        let form = FormState {
            mode: Mode::Register,
            ..Default::default()
        };

        let settlement = dispatch(&gateway, &stores, Submission::from_form(&form)).await;

        assert_eq!(settlement.notices.len(), 1);
        let notice = &settlement.notices[0];
        assert_eq!(notice.level, NoticeLevel::Failure);
        assert!(notice.message.contains("Sign Up"));
        assert!(notice.message.contains("connection refused"));
        assert_eq!(settlement.destination, None);
        assert!(session.writes().is_empty());
        assert!(persisted.writes().is_empty());
        assert_eq!(gateway.register_calls(), 1);
    }

    #[tokio::test]
    async fn accepted_registration_stays_on_form() {
        let (_, persisted, stores) = stores();
        let gateway = MockGateway::new()
            .respond_to_register(Ok(Reply::Accepted(MessageResponse::new("Account created"))));
        let form = FormState {
            mode: Mode::Register,
            ..Default::default()
        };

        let settlement = dispatch(&gateway, &stores, Submission::from_form(&form)).await;

        assert_eq!(settlement.notices, vec![Notice::success("Account created")]);
        assert_eq!(settlement.destination, None);
        assert!(persisted.writes().is_empty());
        assert_eq!(gateway.authenticate_calls(), 0);
    }

    #[tokio::test]
    async fn storage_failure_follows_success_notice_without_navigation() {
        let session = Arc::new(RecordingStore::session());
        let persisted = Arc::new(RecordingStore::persisted().failing());
        let stores = Stores::new(session.clone(), persisted.clone()).unwrap();
        let gateway = MockGateway::new().respond_to_authenticate(Ok(accepted_login("T1", Some("U1"))));

        let settlement = dispatch(
            &gateway,
            &stores,
            Submission::from_form(&login_form(Some(Role::Customer))),
        )
        .await;

        assert_eq!(settlement.notices.len(), 2);
        assert_eq!(settlement.notices[0], Notice::success("ok"));
        assert_eq!(settlement.notices[1].level, NoticeLevel::Failure);
        assert!(settlement.notices[1].message.starts_with("Sign In Error:"));
        assert_eq!(settlement.destination, None);
    }
}
