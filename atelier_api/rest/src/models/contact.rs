use atelier_core_contact_contracts::EmailStatus;
use atelier_models::contact::{
    BudgetRange, CompanyName, ContactSubmission, ProjectType, SubmissionId, SubmissionMessage,
    SubmissionName,
};
use atelier_models::email_address::EmailAddress;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    pub id: SubmissionId,
    pub name: SubmissionName,
    pub email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyName>,
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    pub message: SubmissionMessage,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ApiContactSubmission {
    fn from(value: ContactSubmission) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            company: value.company,
            project_type: value.project_type,
            budget: value.budget,
            message: value.message,
            created_at: value.created_at,
        }
    }
}

/// Response to a form submission attempt.
#[derive(Serialize)]
pub struct ApiContactSubmissionResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SubmissionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEmailStatus {
    pub is_configured: bool,
    pub provider: &'static str,
    pub is_connected: bool,
    pub last_checked: DateTime<Utc>,
}

impl From<EmailStatus> for ApiEmailStatus {
    fn from(value: EmailStatus) -> Self {
        Self {
            is_configured: value.configured,
            provider: value.provider,
            is_connected: value.connected,
            last_checked: value.last_checked,
        }
    }
}
