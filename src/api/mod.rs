//! HTTP API for recording attendance and fetching reports.
//!
//! Routes:
//!
//! - `GET /attendance/:date` and `POST /attendance/:date`
//! - `GET /reports/daily/:date` and `GET /reports/daily/:date/text`
//! - `GET /reports/monthly/:year/:month` and `GET /reports/monthly/:year/:month/text`

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SubmitAttendanceRequest;
pub use response::{ApiError, AttendanceDayResponse, SubmitAttendanceResponse};
pub use state::AppState;
