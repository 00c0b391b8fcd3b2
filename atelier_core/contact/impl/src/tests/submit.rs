use std::time::Duration;

use atelier_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitted, ValidationError,
};
use atelier_demo::contact::{jane_request, JANE};
use atelier_email_contracts::template::MockTemplateEmailService;
use atelier_models::{
    contact::{ContactSubmission, ContactSubmissionRequest},
    email_address::EmailAddressWithName,
};
use atelier_persistence_contracts::{contact::MockContactSubmissionRepository, MockDatabase};
use atelier_shared_contracts::{id::MockIdService, time::MockTimeService};
use atelier_templates_contracts::{InquiryConfirmationTemplate, InquiryNotificationTemplate};
use atelier_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureConfig, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(JANE.id);
    let time = MockTimeService::new().with_now(JANE.created_at);
    let contact_repo = MockContactSubmissionRepository::new().with_create(JANE.clone());

    let template_email = MockTemplateEmailService::new()
        .with_send_inquiry_notification(sales(), notification_data(&JANE), true)
        .with_send_inquiry_confirmation(submitter(&JANE), confirmation_data(&JANE), true);

    let sut = ContactFeatureServiceImpl {
        db,
        id,
        time,
        template_email,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(jane_request()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmitted {
            submission: JANE.clone(),
            notified: true,
            confirmed: true,
        }
    );
}

#[tokio::test]
async fn ok_despite_provider_failures() {
    // Arrange
    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(JANE.id);
    let time = MockTimeService::new().with_now(JANE.created_at);
    let contact_repo = MockContactSubmissionRepository::new().with_create(JANE.clone());

    let template_email = MockTemplateEmailService::new()
        .with_send_inquiry_notification(sales(), notification_data(&JANE), false)
        .with_send_inquiry_confirmation(submitter(&JANE), confirmation_data(&JANE), false);

    let sut = ContactFeatureServiceImpl {
        db,
        id,
        time,
        template_email,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(jane_request()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmitted {
            submission: JANE.clone(),
            notified: false,
            confirmed: false,
        }
    );
}

#[tokio::test]
async fn ok_despite_notification_timeout() {
    // Arrange
    let db = MockDatabase::build(true);
    let id = MockIdService::new().with_generate(JANE.id);
    let time = MockTimeService::new().with_now(JANE.created_at);
    let contact_repo = MockContactSubmissionRepository::new().with_create(JANE.clone());

    let mut template_email = MockTemplateEmailService::new();
    template_email
        .expect_send_inquiry_notification()
        .once()
        .return_once(|_, _| Box::pin(std::future::pending()));
    let template_email = template_email.with_send_inquiry_confirmation(
        submitter(&JANE),
        confirmation_data(&JANE),
        true,
    );

    let sut = ContactFeatureServiceImpl {
        db,
        id,
        time,
        template_email,
        contact_repo,
        config: ContactFeatureConfig {
            send_timeout: Duration::from_millis(10),
            ..Default::default()
        },
        ..Sut::default()
    };

    // Act
    let result = sut.submit(jane_request()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmitted {
            submission: JANE.clone(),
            notified: false,
            confirmed: true,
        }
    );
}

#[tokio::test]
async fn invalid_request() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(ContactSubmissionRequest {
            email: "not-an-email".into(),
            ..jane_request()
        })
        .await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Validation(errors))
            if *errors == [ValidationError::EmailInvalid]
    );
}

#[tokio::test]
async fn storage_error() {
    // Arrange
    let db = MockDatabase::build(false);
    let id = MockIdService::new().with_generate(JANE.id);
    let time = MockTimeService::new().with_now(JANE.created_at);
    let contact_repo = MockContactSubmissionRepository::new().with_create_error(JANE.clone());

    let sut = ContactFeatureServiceImpl {
        db,
        id,
        time,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(jane_request()).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
}

fn sales() -> EmailAddressWithName {
    (*ContactFeatureConfig::default().sales).clone()
}

fn submitter(submission: &ContactSubmission) -> EmailAddressWithName {
    submission
        .email
        .clone()
        .with_name((*submission.name).clone())
}

fn notification_data(submission: &ContactSubmission) -> InquiryNotificationTemplate {
    InquiryNotificationTemplate {
        name: (*submission.name).clone(),
        email: submission.email.as_str().into(),
        company: submission.company.as_ref().map(|x| (**x).clone()),
        project_type: submission.project_type.to_string(),
        budget: submission.budget.map(|x| x.as_str().into()),
        message: (*submission.message).clone(),
    }
}

fn confirmation_data(submission: &ContactSubmission) -> InquiryConfirmationTemplate {
    InquiryConfirmationTemplate {
        name: (*submission.name).clone(),
        email: submission.email.as_str().into(),
        project_type: submission.project_type.to_string(),
    }
}
