//! API contract-test support: wire model and typed client.

mod endpoints;
mod models;

pub use endpoints::{ApiError, ApiResult, UserEndpoints};
pub use models::{FieldError, RegisterOutcome, RegisterRequest, UserData};
