use std::sync::Arc;

use anyhow::anyhow;
use atelier_email_contracts::{Email, EmailBackend, EmailService};
use atelier_models::email_address::EmailAddressWithName;
use serde::Serialize;
use tracing::{error, warn};
use url::Url;

use crate::http::HttpClient;

pub mod http;
pub mod template;

const DEFAULT_API_ENDPOINT: &str = "https://api.sendgrid.com/";
const PROVIDER: &str = "SendGrid";

/// Mail delivery through the SendGrid v3 HTTP API.
///
/// Without an API key the service stays inert: sends report `false` and the
/// rest of the system keeps working.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: EmailServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    api_key: Option<Arc<str>>,
    from: EmailAddressWithName,
    endpoint: Arc<Url>,
}

impl EmailServiceConfig {
    pub fn new(
        api_key: Option<String>,
        from: EmailAddressWithName,
        endpoint_override: Option<Url>,
    ) -> Self {
        Self {
            api_key: api_key.map(Into::into),
            from,
            endpoint: endpoint_override
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> Self {
        if config.api_key.is_none() {
            warn!("No mail provider API key configured, outbound email is disabled");
        }

        Self {
            config,
            client: HttpClient::default(),
        }
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.config.endpoint.join(path).map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!(
                recipient = email.recipient.email.as_str(),
                "Mail provider not configured, skipping send"
            );
            return Ok(false);
        };

        let request = MailSendRequest {
            personalizations: [Personalization {
                to: [MailAddress::new(&email.recipient)],
            }],
            from: MailAddress::new(&self.config.from),
            reply_to: email.reply_to.as_ref().map(MailAddress::new),
            subject: &email.subject,
            content: [
                // text/plain must precede text/html, the provider rejects
                // other orderings
                MailContent {
                    r#type: "text/plain",
                    value: &email.text_body,
                },
                MailContent {
                    r#type: "text/html",
                    value: &email.html_body,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint("v3/mail/send")?)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(true)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Mail provider rejected send: status {status}, body {body}");
            Ok(false)
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("No mail provider API key configured"))?;

        self.client
            .get(self.endpoint("v3/scopes")?)
            .bearer_auth(api_key)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    fn backend(&self) -> EmailBackend {
        let configured = self.config.api_key.is_some();
        EmailBackend {
            configured,
            provider: if configured { PROVIDER } else { "None" },
        }
    }
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: MailAddress<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<MailAddress<'a>>,
    subject: &'a str,
    content: [MailContent<'a>; 2],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [MailAddress<'a>; 1],
}

#[derive(Serialize)]
struct MailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> MailAddress<'a> {
    fn new(address: &'a EmailAddressWithName) -> Self {
        Self {
            email: address.email.as_str(),
            name: address.name.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct MailContent<'a> {
    r#type: &'static str,
    value: &'a str,
}
