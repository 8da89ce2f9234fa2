use super::client::{ApiClient, ApiError};
use crate::models::CalendarDay;

impl ApiClient {
    /// Get predicted loadshedding days for a month. The month is 1-based
    /// on the wire.
    pub async fn get_calendar(&self, year: i32, month1: u32) -> Result<Vec<CalendarDay>, ApiError> {
        self.get(&format!("/api/calendar/{}/{}", year, month1)).await
    }
}
