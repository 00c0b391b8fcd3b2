use std::{sync::Arc, time::Duration};

use anyhow::Context;
use atelier_core_contact_contracts::{
    ContactFeatureService, ContactGetSubmissionError, ContactSubmitError, ContactSubmitted,
    EmailStatus, SubmissionPage,
};
use atelier_email_contracts::{template::TemplateEmailService, EmailService};
use atelier_models::{
    contact::{ContactSubmission, ContactSubmissionRequest, SubmissionId},
    email_address::EmailAddressWithName,
    pagination::PageRequest,
};
use atelier_persistence_contracts::{contact::ContactSubmissionRepository, Database, Transaction};
use atelier_shared_contracts::{id::IdService, time::TimeService};
use atelier_templates_contracts::{InquiryConfirmationTemplate, InquiryNotificationTemplate};
use tracing::{error, info, warn};

pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureServiceImpl<Db, Id, Time, Email, TemplateEmail, ContactRepo> {
    db: Db,
    id: Id,
    time: Time,
    email: Email,
    template_email: TemplateEmail,
    contact_repo: ContactRepo,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of the internal sales notifications.
    pub sales: Arc<EmailAddressWithName>,
    /// Upper bound applied around each notification send attempt.
    pub send_timeout: Duration,
}

impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            sales: Arc::new(EmailAddressWithName {
                email: "sales@atelierstudios.com".parse().unwrap(),
                name: Some("Atelier Studios Sales Team".into()),
            }),
            send_timeout: Duration::from_secs(15),
        }
    }
}

impl<Db, Id, Time, Email, TemplateEmail, ContactRepo>
    ContactFeatureServiceImpl<Db, Id, Time, Email, TemplateEmail, ContactRepo>
{
    pub fn new(
        db: Db,
        id: Id,
        time: Time,
        email: Email,
        template_email: TemplateEmail,
        contact_repo: ContactRepo,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            db,
            id,
            time,
            email,
            template_email,
            contact_repo,
            config,
        }
    }
}

impl<Db, Id, Time, Email, TemplateEmail, ContactRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Id, Time, Email, TemplateEmail, ContactRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    Email: EmailService,
    TemplateEmail: TemplateEmailService,
    ContactRepo: ContactSubmissionRepository<Db::Transaction>,
{
    async fn submit(
        &self,
        request: ContactSubmissionRequest,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let new = validate::validate(&request).map_err(ContactSubmitError::Validation)?;

        let submission = ContactSubmission {
            id: self.id.generate(),
            name: new.name,
            email: new.email,
            company: new.company,
            project_type: new.project_type,
            budget: new.budget,
            message: new.message,
            created_at: self.time.now(),
        };

        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .create(&mut txn, &submission)
            .await
            .context("Failed to create contact submission")?;
        txn.commit().await?;

        info!(
            submission_id = %*submission.id,
            email = submission.email.as_str(),
            "Stored contact submission"
        );

        let notified = self.notify_sales(&submission).await;
        let confirmed = self.confirm_submitter(&submission).await;

        Ok(ContactSubmitted {
            submission,
            notified,
            confirmed,
        })
    }

    async fn list_submissions(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .list(&mut txn)
            .await
            .context("Failed to list contact submissions")
    }

    async fn list_submissions_paginated(&self, page: PageRequest) -> anyhow::Result<SubmissionPage> {
        let mut txn = self.db.begin_transaction().await?;

        let total = self
            .contact_repo
            .count(&mut txn)
            .await
            .context("Failed to count contact submissions")?;

        let submissions = self
            .contact_repo
            .list_page(&mut txn, page)
            .await
            .context("Failed to list contact submissions")?;

        Ok(SubmissionPage { submissions, total })
    }

    async fn get_submission(
        &self,
        submission_id: SubmissionId,
    ) -> Result<ContactSubmission, ContactGetSubmissionError> {
        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .get(&mut txn, submission_id)
            .await
            .context("Failed to get contact submission")?
            .ok_or(ContactGetSubmissionError::NotFound)
    }

    async fn get_email_status(&self) -> EmailStatus {
        let backend = self.email.backend();

        let connected = backend.configured
            && self
                .email
                .ping()
                .await
                .inspect_err(|err| warn!("Failed to ping mail provider: {err:#}"))
                .is_ok();

        EmailStatus {
            configured: backend.configured,
            provider: backend.provider,
            connected,
            last_checked: self.time.now(),
        }
    }
}

impl<Db, Id, Time, Email, TemplateEmail, ContactRepo>
    ContactFeatureServiceImpl<Db, Id, Time, Email, TemplateEmail, ContactRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    Email: EmailService,
    TemplateEmail: TemplateEmailService,
    ContactRepo: ContactSubmissionRepository<Db::Transaction>,
{
    async fn notify_sales(&self, submission: &ContactSubmission) -> bool {
        let data = InquiryNotificationTemplate {
            name: (*submission.name).clone(),
            email: submission.email.as_str().into(),
            company: submission.company.as_ref().map(|x| (**x).clone()),
            project_type: submission.project_type.to_string(),
            budget: submission.budget.map(|x| x.as_str().into()),
            message: (*submission.message).clone(),
        };

        let send = self
            .template_email
            .send_inquiry_notification((*self.config.sales).clone(), &data);

        self.best_effort("inquiry notification", send).await
    }

    async fn confirm_submitter(&self, submission: &ContactSubmission) -> bool {
        let data = InquiryConfirmationTemplate {
            name: (*submission.name).clone(),
            email: submission.email.as_str().into(),
            project_type: submission.project_type.to_string(),
        };

        let recipient = submission
            .email
            .clone()
            .with_name((*submission.name).clone());

        let send = self.template_email.send_inquiry_confirmation(recipient, &data);

        self.best_effort("inquiry confirmation", send).await
    }

    /// Runs a notification send under the configured timeout, flattening every
    /// failure mode into `false`.
    async fn best_effort(
        &self,
        what: &str,
        send: impl std::future::Future<Output = anyhow::Result<bool>>,
    ) -> bool {
        match tokio::time::timeout(self.config.send_timeout, send).await {
            Ok(Ok(true)) => true,
            Ok(Ok(false)) => {
                warn!("Mail provider did not accept {what}");
                false
            }
            Ok(Err(err)) => {
                error!("Failed to send {what}: {err:#}");
                false
            }
            Err(_) => {
                error!("Timed out sending {what}");
                false
            }
        }
    }
}
