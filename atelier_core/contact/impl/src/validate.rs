use atelier_core_contact_contracts::ValidationError;
use atelier_models::{
    contact::{
        BudgetRange, CompanyName, CompanyNameError, ContactSubmissionRequest,
        NewContactSubmission, ProjectType, SubmissionMessage, SubmissionMessageError,
        SubmissionName, SubmissionNameError,
    },
    email_address::EmailAddress,
};

const EMAIL_MAX_CHARS: usize = 255;

/// Checks the raw form payload against the field rules and produces the
/// normalized submission (trimmed fields, lower-cased email, blank optionals
/// dropped).
///
/// At most one violation is reported per field, in field declaration order.
pub fn validate(
    request: &ContactSubmissionRequest,
) -> Result<NewContactSubmission, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = match SubmissionName::try_new(&request.name) {
        Ok(name) => Some(name),
        Err(SubmissionNameError::NotEmptyViolated) => {
            errors.push(ValidationError::NameMissing);
            None
        }
        Err(SubmissionNameError::LenCharMaxViolated) => {
            errors.push(ValidationError::NameTooLong);
            None
        }
    };

    let email = validate_email(&request.email, &mut errors);

    let company = match normalize_optional(request.company.as_deref()) {
        None => Some(None),
        Some(raw) => match CompanyName::try_new(raw) {
            Ok(company) => Some(Some(company)),
            Err(CompanyNameError::NotEmptyViolated | CompanyNameError::LenCharMaxViolated) => {
                errors.push(ValidationError::CompanyTooLong);
                None
            }
        },
    };

    let project_type = {
        let raw = request.project_type.trim();
        if raw.is_empty() {
            errors.push(ValidationError::ProjectTypeMissing);
            None
        } else {
            match raw.parse::<ProjectType>() {
                Ok(project_type) => Some(project_type),
                Err(_) => {
                    errors.push(ValidationError::ProjectTypeInvalid);
                    None
                }
            }
        }
    };

    let budget = match normalize_optional(request.budget.as_deref()) {
        None => Some(None),
        Some(raw) => match raw.parse::<BudgetRange>() {
            Ok(budget) => Some(Some(budget)),
            Err(_) => {
                errors.push(ValidationError::BudgetInvalid);
                None
            }
        },
    };

    let message = if request.message.trim().is_empty() {
        errors.push(ValidationError::MessageMissing);
        None
    } else {
        match SubmissionMessage::try_new(&request.message) {
            Ok(message) => Some(message),
            Err(SubmissionMessageError::LenCharMinViolated) => {
                errors.push(ValidationError::MessageTooShort);
                None
            }
            Err(SubmissionMessageError::LenCharMaxViolated) => {
                errors.push(ValidationError::MessageTooLong);
                None
            }
        }
    };

    match (name, email, company, project_type, budget, message) {
        (Some(name), Some(email), Some(company), Some(project_type), Some(budget), Some(message)) => {
            Ok(NewContactSubmission {
                name,
                email,
                company,
                project_type,
                budget,
                message,
            })
        }
        _ => Err(errors),
    }
}

fn validate_email(raw: &str, errors: &mut Vec<ValidationError>) -> Option<EmailAddress> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::EmailMissing);
        None
    } else if trimmed.chars().count() > EMAIL_MAX_CHARS {
        errors.push(ValidationError::EmailTooLong);
        None
    } else {
        match EmailAddress::normalized(trimmed) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(ValidationError::EmailInvalid);
                None
            }
        }
    }
}

/// Blank optional fields are treated as absent.
fn normalize_optional(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|x| !x.is_empty())
}
