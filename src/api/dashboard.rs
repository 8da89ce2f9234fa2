use super::client::{ApiClient, ApiError};
use crate::models::DashboardResponse;

impl ApiClient {
    /// Get the national dashboard payload: status, areas, chart and map data
    pub async fn get_dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.get("/").await
    }
}
