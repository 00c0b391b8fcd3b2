use std::future::Future;

use atelier_models::{
    contact::{ContactSubmission, ContactSubmissionRequest, SubmissionId},
    pagination::PageRequest,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates, stores and dispatches notifications for a new inquiry.
    ///
    /// Both notification emails are best effort: their outcome is reported in
    /// [`ContactSubmitted`] but a failed or unconfigured mail provider never
    /// fails the submission.
    fn submit(
        &self,
        request: ContactSubmissionRequest,
    ) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;

    /// Returns all stored submissions, newest first.
    fn list_submissions(
        &self,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Returns one page of submissions (newest first) plus the total count.
    fn list_submissions_paginated(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = anyhow::Result<SubmissionPage>> + Send;

    /// Returns the submission with the given id.
    fn get_submission(
        &self,
        submission_id: SubmissionId,
    ) -> impl Future<Output = Result<ContactSubmission, ContactGetSubmissionError>> + Send;

    /// Reports the mail provider configuration and connectivity.
    ///
    /// Never sends mail and never fails; connectivity problems simply show up
    /// as `connected: false`.
    fn get_email_status(&self) -> impl Future<Output = EmailStatus> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmitted {
    pub submission: ContactSubmission,
    /// Whether the internal sales notification was accepted by the provider.
    pub notified: bool,
    /// Whether the confirmation to the submitter was accepted by the provider.
    pub confirmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPage {
    pub submissions: Vec<ContactSubmission>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailStatus {
    pub configured: bool,
    pub provider: &'static str,
    pub connected: bool,
    pub last_checked: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission failed validation.")]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactGetSubmissionError {
    #[error("The submission does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A violated form rule. Validation reports at most one violation per field,
/// in field declaration order, each rendering to a human readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameMissing,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Email is required")]
    EmailMissing,
    #[error("Email must be less than 255 characters")]
    EmailTooLong,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Company name must be less than 100 characters")]
    CompanyTooLong,
    #[error("Project type is required")]
    ProjectTypeMissing,
    #[error("Please select a valid project type")]
    ProjectTypeInvalid,
    #[error("Please select a valid budget range")]
    BudgetInvalid,
    #[error("Message is required")]
    MessageMissing,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message must be less than 2000 characters")]
    MessageTooLong,
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        request: ContactSubmissionRequest,
        result: ContactSubmitted,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_validation_errors(
        mut self,
        request: ContactSubmissionRequest,
        errors: Vec<ValidationError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(ContactSubmitError::Validation(
                    errors,
                ))))
            });
        self
    }

    pub fn with_list_submissions(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list_submissions()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_submissions_paginated(
        mut self,
        page: PageRequest,
        result: SubmissionPage,
    ) -> Self {
        self.expect_list_submissions_paginated()
            .once()
            .with(mockall::predicate::eq(page))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_submission(
        mut self,
        submission_id: SubmissionId,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_get_submission()
            .once()
            .with(mockall::predicate::eq(submission_id))
            .return_once(|_| {
                Box::pin(std::future::ready(
                    result.ok_or(ContactGetSubmissionError::NotFound),
                ))
            });
        self
    }

    pub fn with_get_email_status(mut self, result: EmailStatus) -> Self {
        self.expect_get_email_status()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
