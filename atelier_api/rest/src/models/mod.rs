use serde::Serialize;

pub mod contact;

/// The `{success: false, message}` body shared by all failure responses.
#[derive(Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub message: &'static str,
}
