//! Exercises the provider client against an in-process stand-in for the
//! SendGrid API.

use std::sync::{Arc, Mutex};

use atelier_email_contracts::{Email, EmailBackend, EmailService};
use atelier_email_impl::{EmailServiceConfig, EmailServiceImpl};
use atelier_models::email_address::EmailAddress;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing, Json, Router,
};
use serde_json::Value;
use url::Url;

#[tokio::test]
async fn send_posts_provider_payload() {
    let provider = Provider::spawn(StatusCode::ACCEPTED).await;
    let sut = provider.service();

    let result = sut.send(email()).await.unwrap();

    assert!(result);

    let requests = provider.received.lock().unwrap();
    let (auth, body) = &requests[0];
    assert_eq!(auth, "Bearer test-key");
    assert_eq!(body["from"]["email"], "noreply@atelierstudios.com");
    assert_eq!(body["from"]["name"], "Atelier Studios Website");
    assert_eq!(
        body["personalizations"][0]["to"][0]["email"],
        "test@example.com"
    );
    assert_eq!(body["subject"], "The Subject");
    assert_eq!(body["content"][0]["type"], "text/plain");
    assert_eq!(body["content"][0]["value"], "Hello World!");
    assert_eq!(body["content"][1]["type"], "text/html");
    assert_eq!(body["content"][1]["value"], "<h1>Hello World!</h1>");
    assert_eq!(body["reply_to"]["email"], "replyto@example.com");
}

#[tokio::test]
async fn send_reports_provider_rejection() {
    let provider = Provider::spawn(StatusCode::UNAUTHORIZED).await;
    let sut = provider.service();

    let result = sut.send(email()).await.unwrap();

    assert!(!result);
}

#[tokio::test]
async fn send_without_credential_is_a_noop() {
    let sut = EmailServiceImpl::new(EmailServiceConfig::new(
        None,
        "noreply@atelierstudios.com".parse().unwrap(),
        None,
    ));

    let result = sut.send(email()).await.unwrap();

    assert!(!result);
    assert_eq!(
        sut.backend(),
        EmailBackend {
            configured: false,
            provider: "None",
        }
    );
}

#[tokio::test]
async fn ping() {
    let provider = Provider::spawn(StatusCode::ACCEPTED).await;
    let sut = provider.service();

    sut.ping().await.unwrap();
    assert_eq!(
        sut.backend(),
        EmailBackend {
            configured: true,
            provider: "SendGrid",
        }
    );

    assert!(provider.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ping_without_credential_fails() {
    let sut = EmailServiceImpl::new(EmailServiceConfig::new(
        None,
        "noreply@atelierstudios.com".parse().unwrap(),
        None,
    ));

    sut.ping().await.unwrap_err();
}

fn email() -> Email {
    Email {
        recipient: "test@example.com".parse().unwrap(),
        subject: "The Subject".into(),
        html_body: "<h1>Hello World!</h1>".into(),
        text_body: "Hello World!".into(),
        reply_to: Some("replyto@example.com".parse().unwrap()),
    }
}

struct Provider {
    url: Url,
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

#[derive(Clone)]
struct ProviderState {
    received: Arc<Mutex<Vec<(String, Value)>>>,
    status: StatusCode,
}

impl Provider {
    async fn spawn(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/v3/mail/send", routing::post(mail_send))
            .route("/v3/scopes", routing::get(|| async { StatusCode::OK }))
            .with_state(ProviderState {
                received: Arc::clone(&received),
                status,
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap())
            .parse()
            .unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self { url, received }
    }

    fn service(&self) -> EmailServiceImpl {
        EmailServiceImpl::new(EmailServiceConfig::new(
            Some("test-key".into()),
            EmailAddress::try_from("noreply@atelierstudios.com")
                .unwrap()
                .with_name("Atelier Studios Website"),
            Some(self.url.clone()),
        ))
    }
}

async fn mail_send(
    State(state): State<ProviderState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let auth = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    state.received.lock().unwrap().push((auth, body));
    state.status
}
