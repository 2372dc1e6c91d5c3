//! Request types for the attendance API.

use serde::{Deserialize, Serialize};

use crate::calculation::DaySubmission;

/// Request body for `POST /attendance/:date`.
///
/// Entries without a status are left unrecorded; resubmitting an entry
/// for the same staff member and date replaces the earlier record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitAttendanceRequest {
    /// One entry per staff member.
    pub entries: Vec<DaySubmission>,
}
