use std::sync::Arc;

use atelier_core_contact_contracts::{
    ContactFeatureService, ContactGetSubmissionError, ContactSubmitError, ContactSubmitted,
    SubmissionPage,
};
use atelier_models::{
    contact::ContactSubmissionRequest,
    pagination::{PageNumber, PageRequest, PageSize},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{error, internal_server_error};
use crate::models::contact::{
    ApiContactSubmission, ApiContactSubmissionResponse, ApiEmailStatus,
};

const SUBMITTED_NOTIFIED: &str = "Thank you for your project inquiry! Our sales team has \
                                  received it and will contact you within 24 hours to discuss \
                                  next steps.";
const SUBMITTED_UNNOTIFIED: &str = "Thank you for your project inquiry! We've received it. For \
                                    urgent matters, please contact sales@atelierstudios.com \
                                    directly.";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::get(list).post(submit))
        .route("/api/contact/paginated", routing::get(list_paginated))
        .route("/api/contact/email-status", routing::get(email_status))
        .route("/api/contact/:submission_id", routing::get(get_by_id))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(request): Json<ContactSubmissionRequest>,
) -> Response {
    match service.submit(request).await {
        Ok(ContactSubmitted {
            submission,
            notified,
            confirmed: _,
        }) => Json(ApiContactSubmissionResponse {
            success: true,
            message: if notified {
                SUBMITTED_NOTIFIED
            } else {
                SUBMITTED_UNNOTIFIED
            },
            id: Some(submission.id),
            errors: None,
        })
        .into_response(),
        Err(ContactSubmitError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiContactSubmissionResponse {
                success: false,
                message: "Please check your form data and try again.",
                id: None,
                errors: Some(errors.iter().map(ToString::to_string).collect()),
            }),
        )
            .into_response(),
        Err(ContactSubmitError::Other(err)) => {
            tracing::error!("internal server error: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiContactSubmissionResponse {
                    success: false,
                    message: "Sorry, there was an error sending your message. Please try again \
                              later.",
                    id: None,
                    errors: None,
                }),
            )
                .into_response()
        }
    }
}

async fn list(service: State<Arc<impl ContactFeatureService>>) -> Response {
    match service.list_submissions().await {
        Ok(submissions) => Json(
            submissions
                .into_iter()
                .map(ApiContactSubmission::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_server_error(err, "Error retrieving contact submissions"),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_page_size")]
    page_size: u64,
}

fn default_page() -> u64 {
    PageNumber::FIRST
}

fn default_page_size() -> u64 {
    PageSize::DEFAULT
}

async fn list_paginated(
    service: State<Arc<impl ContactFeatureService>>,
    Query(query): Query<PaginationQuery>,
) -> Response {
    let Ok(page) = PageNumber::try_new(query.page) else {
        return error(
            StatusCode::BAD_REQUEST,
            "Page number must be greater than 0",
        );
    };
    let Ok(size) = PageSize::try_new(query.page_size) else {
        return error(
            StatusCode::BAD_REQUEST,
            "Page size must be between 1 and 100",
        );
    };

    match service
        .list_submissions_paginated(PageRequest { page, size })
        .await
    {
        Ok(SubmissionPage { submissions, total }) => Json(ApiPaginatedSubmissions {
            success: true,
            data: submissions
                .into_iter()
                .map(ApiContactSubmission::from)
                .collect(),
            pagination: ApiPagination::new(page, size, total),
        })
        .into_response(),
        Err(err) => internal_server_error(err, "Error retrieving contact submissions"),
    }
}

#[derive(Serialize)]
struct ApiPaginatedSubmissions {
    success: bool,
    data: Vec<ApiContactSubmission>,
    pagination: ApiPagination,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiPagination {
    page: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
    has_next_page: bool,
    has_previous_page: bool,
}

impl ApiPagination {
    fn new(page: PageNumber, size: PageSize, total: u64) -> Self {
        let page = *page;
        let page_size = *size;
        Self {
            page,
            page_size,
            total_count: total,
            total_pages: total.div_ceil(page_size),
            has_next_page: page * page_size < total,
            has_previous_page: page > 1,
        }
    }
}

async fn get_by_id(
    service: State<Arc<impl ContactFeatureService>>,
    Path(submission_id): Path<Uuid>,
) -> Response {
    match service.get_submission(submission_id.into()).await {
        Ok(submission) => Json(ApiContactSubmission::from(submission)).into_response(),
        Err(ContactGetSubmissionError::NotFound) => {
            error(StatusCode::NOT_FOUND, "Contact submission not found")
        }
        Err(ContactGetSubmissionError::Other(err)) => {
            internal_server_error(err, "Error retrieving contact submission")
        }
    }
}

async fn email_status(service: State<Arc<impl ContactFeatureService>>) -> Response {
    Json(ApiEmailStatus::from(service.get_email_status().await)).into_response()
}
