use axum::{http::StatusCode, routing::post, Json, Router};
use credform_api::{ApiError, Client, Endpoints, LoginRequest, Reply, SignupRequest};
use serde_json::{json, Value};

/// Serve `app` on an ephemeral local port and return its base URL
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn login_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "token": "T1",
                "user": { "_id": "U1", "email": body["email"] },
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "bad credentials" })),
        )
    }
}

async fn signup_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    // Echo back the fields so the test can see the wire shape
    let keys: Vec<String> = body
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    (
        StatusCode::CREATED,
        Json(json!({ "message": keys.join(",") })),
    )
}

fn test_app() -> Router {
    Router::new()
        .route("/api/login", post(login_handler))
        .route("/api/signup", post(signup_handler))
}

#[tokio::test]
async fn test_login_accepted() {
    let base = spawn_server(test_app()).await;
    let client = Client::new(&base, &Endpoints::default()).unwrap();

    let req = LoginRequest::new()
        .email("a@b")
        .password("secret".to_string())
        .role("customer");
    let reply = client.login(&req).await.unwrap();

    match reply {
        Reply::Accepted(body) => {
            assert_eq!(body.message, "Login successful");
            assert_eq!(body.token, "T1");
            assert_eq!(body.user_id(), Some("U1"));
        }
        other => panic!("expected accepted reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_rejected_carries_server_message() {
    let base = spawn_server(test_app()).await;
    let client = Client::new(&base, &Endpoints::default()).unwrap();

    let req = LoginRequest::new()
        .email("a@b")
        .password("wrong".to_string())
        .role("customer");
    let reply = client.login(&req).await.unwrap();

    assert_eq!(
        reply,
        Reply::Rejected {
            status: 401,
            message: "bad credentials".to_string(),
        }
    );
}

#[tokio::test]
async fn test_signup_sends_json_with_all_fields() {
    let base = spawn_server(test_app()).await;
    // Trailing slash on the server URL must not double up
    let client = Client::new(&format!("{}/", base), &Endpoints::default()).unwrap();
    assert_eq!(client.signup_url(), format!("{}/api/signup", base));

    let req = SignupRequest::new()
        .name("Ada")
        .email("ada@example.com")
        .national_id("1234567890123")
        .password("pw1".to_string())
        .role("agent");
    let reply = client.signup(&req).await.unwrap();

    match reply {
        Reply::Accepted(body) => {
            let mut keys: Vec<&str> = body.message.split(',').collect();
            keys.sort();
            assert_eq!(keys, vec!["email", "name", "nationalId", "password", "role"]);
        }
        other => panic!("expected accepted reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let app = Router::new().route(
        "/api/login",
        post(|| async { (StatusCode::OK, "<html>oops</html>") }),
    );
    let base = spawn_server(app).await;
    let client = Client::new(&base, &Endpoints::default()).unwrap();

    let err = client.login(&LoginRequest::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_is_an_http_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(&format!("http://{}", addr), &Endpoints::default()).unwrap();
    let err = client.login(&LoginRequest::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("HTTP error"));
}
