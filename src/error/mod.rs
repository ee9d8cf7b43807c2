//! Error types for the API client.
//!
//! | Category | Variant | Meaning |
//! |----------|---------|---------|
//! | Network | `ApiError::Network` | Request not sent or no response received |
//! | Server | `ApiError::Server` | Non-2xx status from the backend |
//! | Client | `ApiError::Decode` | Body is not JSON of the expected shape |
//! | User | `ApiError::Validation` | Reserved; inputs are not checked today |
//!
//! Nothing in this crate retries; the category only drives messaging and
//! log fields.

mod api;
mod category;

pub use api::{ApiError, ApiResult};
pub use category::ErrorCategory;
