use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, macros::id};

id!(SubmissionId);

/// A stored contact/project inquiry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub company: Option<CompanyName>,
    pub project_type: ProjectType,
    pub budget: Option<BudgetRange>,
    pub message: SubmissionMessage,
    pub created_at: DateTime<Utc>,
}

/// A validated and normalized submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub company: Option<CompanyName>,
    pub project_type: ProjectType,
    pub budget: Option<BudgetRange>,
    pub message: SubmissionMessage,
}

/// The untrusted form payload as it arrives on the wire. Absent fields
/// deserialize to empty values so they surface as validation errors instead
/// of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmissionRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: Option<String>,
    pub message: String,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct CompanyName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

/// The closed set of inquiry categories offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Custom Software Development")]
    CustomSoftwareDevelopment,
    #[serde(rename = "API Integration")]
    ApiIntegration,
    #[serde(rename = "Mobile Application")]
    MobileApplication,
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Database Design")]
    DatabaseDesign,
    #[serde(rename = "System Integration")]
    SystemIntegration,
    #[serde(rename = "Consulting")]
    Consulting,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectType {
    pub const ALL: [Self; 8] = [
        Self::CustomSoftwareDevelopment,
        Self::ApiIntegration,
        Self::MobileApplication,
        Self::WebApplication,
        Self::DatabaseDesign,
        Self::SystemIntegration,
        Self::Consulting,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CustomSoftwareDevelopment => "Custom Software Development",
            Self::ApiIntegration => "API Integration",
            Self::MobileApplication => "Mobile Application",
            Self::WebApplication => "Web Application",
            Self::DatabaseDesign => "Database Design",
            Self::SystemIntegration => "System Integration",
            Self::Consulting => "Consulting",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown project type")]
pub struct UnknownProjectType;

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or(UnknownProjectType)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of budget ranges offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "Under $10,000")]
    Under10k,
    #[serde(rename = "$10,000 - $25,000")]
    From10kTo25k,
    #[serde(rename = "$25,000 - $50,000")]
    From25kTo50k,
    #[serde(rename = "$50,000 - $100,000")]
    From50kTo100k,
    #[serde(rename = "$100,000+")]
    Over100k,
}

impl BudgetRange {
    pub const ALL: [Self; 5] = [
        Self::Under10k,
        Self::From10kTo25k,
        Self::From25kTo50k,
        Self::From50kTo100k,
        Self::Over100k,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Under10k => "Under $10,000",
            Self::From10kTo25k => "$10,000 - $25,000",
            Self::From25kTo50k => "$25,000 - $50,000",
            Self::From50kTo100k => "$50,000 - $100,000",
            Self::Over100k => "$100,000+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown budget range")]
pub struct UnknownBudgetRange;

impl FromStr for BudgetRange {
    type Err = UnknownBudgetRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or(UnknownBudgetRange)
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
