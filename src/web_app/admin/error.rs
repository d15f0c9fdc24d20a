// web_app/admin/error.rs - Errors surfaced to the user
//
// The Display text of every variant is exactly what the alert shows.

use thiserror::Error;

use super::forms::FormField;
use crate::web_app::api::ApiError;

/// Result type for controller handlers
pub type AdminResult<T> = Result<T, AdminError>;

/// The request a failure belongs to, used to pick the fallback text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAction {
    LoadProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    UploadCsv,
    LookupSku,
}

impl AdminAction {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AdminAction::LoadProducts => "Error loading products.",
            AdminAction::CreateProduct => "Error adding the product.",
            AdminAction::UpdateProduct => "Error updating the product.",
            AdminAction::DeleteProduct => "Error deleting the product.",
            AdminAction::UploadCsv => "Error uploading the CSV file.",
            AdminAction::LookupSku => "Error looking up the SKU.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdminError {
    /// Blocked before any request
    #[error("Please fill in all fields.")]
    MissingFields(Vec<FormField>),

    #[error("{0} must be a whole number.")]
    InvalidNumber(FormField),

    #[error("The SKU already exists. Please use a unique SKU.")]
    DuplicateSku(String),

    #[error("Please select a CSV file.")]
    NoFileSelected,

    /// A file is selected but its contents could not be read
    #[error("Could not read {0}. Please select the file again.")]
    FileUnreadable(String),

    #[error("Please enter a SKU.")]
    MissingSku,

    #[error("No product is selected.")]
    NothingSelected,

    /// The request was sent and failed
    #[error("{message}")]
    Request {
        action: AdminAction,
        message: String,
        source: ApiError,
    },
}

impl AdminError {
    /// Wrap a backend failure; the backend's message wins over the fallback,
    /// except for the list load which always shows the generic text.
    pub fn request(action: AdminAction, err: ApiError) -> Self {
        let message = match action {
            AdminAction::LoadProducts => None,
            _ => err.server_message().map(str::to_string),
        }
        .unwrap_or_else(|| action.fallback_message().to_string());

        AdminError::Request {
            action,
            message,
            source: err,
        }
    }

    /// True when nothing was sent to the backend
    pub fn is_client_side(&self) -> bool {
        !matches!(self, AdminError::Request { .. })
    }
}
