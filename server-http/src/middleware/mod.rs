pub mod authentication;

pub use authentication::require_bearer;
