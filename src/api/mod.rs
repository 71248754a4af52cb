//! HTTP API for the categorization engine.
//!
//! A thin axum surface over the engine: one calculation endpoint and one
//! holiday listing endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EntryRequest, PeriodRequest, RegionRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, HolidaysResponse};
pub use state::AppState;
