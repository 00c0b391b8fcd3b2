use std::future::Future;

use atelier_models::email_address::EmailAddressWithName;

pub mod template;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hands the email to the mail provider.
    ///
    /// `Ok(false)` means the provider refused the message or no provider is
    /// configured; transport errors are returned as `Err`.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Verifies the provider credential without sending any mail.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Describes the configured mail backend.
    fn backend(&self) -> EmailBackend;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailBackend {
    pub configured: bool,
    pub provider: &'static str,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_ping(mut self, result: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(result.then_some(()).ok_or_else(|| {
                anyhow::anyhow!("Failed to reach mail provider")
            })))
        });
        self
    }

    pub fn with_backend(mut self, backend: EmailBackend) -> Self {
        self.expect_backend().once().return_const(backend);
        self
    }
}
