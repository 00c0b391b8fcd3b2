use std::sync::LazyLock;

use atelier_models::contact::{
    BudgetRange, ContactSubmission, ContactSubmissionRequest, NewContactSubmission, ProjectType,
};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

/// A minimal inquiry: no company, no budget.
pub static JANE: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: Uuid::from_u128(0xd07ebe1c_7bb5_4d4b_b587_c23acf5bff4b).into(),
    name: "Jane Doe".try_into().unwrap(),
    email: "jane@example.com".parse().unwrap(),
    company: None,
    project_type: ProjectType::Consulting,
    budget: None,
    message: "I need help building an internal tool.".try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
});

/// A fully populated inquiry.
pub static ACME: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    id: Uuid::from_u128(0x3f0a1f86_1f24_4b2e_9a4f_5ce1a9cf31fc).into(),
    name: "Arthur Dent".try_into().unwrap(),
    email: "arthur@acme.example".parse().unwrap(),
    company: Some("Acme Corp".try_into().unwrap()),
    project_type: ProjectType::WebApplication,
    budget: Some(BudgetRange::From25kTo50k),
    message: "We want to replace our aging order portal with something modern."
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap(),
});

pub static ALL_SUBMISSIONS: LazyLock<Vec<&'static ContactSubmission>> =
    LazyLock::new(|| vec![&*ACME, &*JANE]);

/// The raw form payload matching [`JANE`].
pub fn jane_request() -> ContactSubmissionRequest {
    ContactSubmissionRequest {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        company: None,
        project_type: "Consulting".into(),
        budget: None,
        message: "I need help building an internal tool.".into(),
    }
}

/// The validated payload matching [`JANE`].
pub fn jane_new_submission() -> NewContactSubmission {
    NewContactSubmission {
        name: JANE.name.clone(),
        email: JANE.email.clone(),
        company: None,
        project_type: JANE.project_type,
        budget: None,
        message: JANE.message.clone(),
    }
}

/// The raw form payload matching [`ACME`].
pub fn acme_request() -> ContactSubmissionRequest {
    ContactSubmissionRequest {
        name: "Arthur Dent".into(),
        email: "arthur@acme.example".into(),
        company: Some("Acme Corp".into()),
        project_type: "Web Application".into(),
        budget: Some("$25,000 - $50,000".into()),
        message: "We want to replace our aging order portal with something modern.".into(),
    }
}
