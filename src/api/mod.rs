//! HTTP API module for the GPA engine.
//!
//! A thin axum adapter over the pure calculation core: it accepts course
//! lists as JSON and returns the computed GPA, its tier, or the downloadable
//! plain-text report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, CourseRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
