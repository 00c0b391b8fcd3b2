use atelier_email_contracts::{template::TemplateEmailService, Email, EmailService};
use atelier_models::email_address::EmailAddressWithName;
use atelier_templates_contracts::{
    InquiryConfirmationTemplate, InquiryNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<Email, Template> TemplateEmailServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_inquiry_notification(
        &self,
        recipient: EmailAddressWithName,
        data: &InquiryNotificationTemplate,
    ) -> anyhow::Result<bool> {
        // Replies to the notification should go straight to the submitter.
        let reply_to = EmailAddressWithName {
            email: data.email.parse()?,
            name: Some(data.name.clone()),
        };

        self.send_email(
            recipient,
            data,
            format!("New Project Inquiry from {}", data.name),
            Some(reply_to),
        )
        .await
    }

    async fn send_inquiry_confirmation(
        &self,
        recipient: EmailAddressWithName,
        data: &InquiryConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(
            recipient,
            data,
            "Thank you for contacting Atelier Studios - We'll be in touch soon!",
            None,
        )
        .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        data: &T,
        subject: impl Into<String>,
        reply_to: Option<EmailAddressWithName>,
    ) -> anyhow::Result<bool> {
        let rendered = self.template.render(data)?;

        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                html_body: rendered.html,
                text_body: rendered.text,
                reply_to,
            })
            .await
    }
}
