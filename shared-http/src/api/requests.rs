use serde::{Deserialize, Serialize};

/// Request body for the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Multipart field names of the account status endpoints.
pub struct AccountForm;

impl AccountForm {
    pub const ENTRY_CUSTOMER_ID: &'static str = "entry_customer_id";
    pub const ENTRY_DATE: &'static str = "entry_date";
}
