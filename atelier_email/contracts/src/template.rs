use std::future::Future;

use atelier_models::email_address::EmailAddressWithName;
use atelier_templates_contracts::{InquiryConfirmationTemplate, InquiryNotificationTemplate};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Sends the internal sales notification for a new inquiry, with the
    /// submitter set as reply-to.
    fn send_inquiry_notification(
        &self,
        recipient: EmailAddressWithName,
        data: &InquiryNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Sends the "thank you, here's what happens next" confirmation to the
    /// submitter.
    fn send_inquiry_confirmation(
        &self,
        recipient: EmailAddressWithName,
        data: &InquiryConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_inquiry_notification(
        mut self,
        recipient: EmailAddressWithName,
        data: InquiryNotificationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_inquiry_notification()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_inquiry_confirmation(
        mut self,
        recipient: EmailAddressWithName,
        data: InquiryConfirmationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_inquiry_confirmation()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
