use super::client::{ApiClient, ApiError};
use crate::models::AreaResponse;

impl ApiClient {
    /// Get schedule, statistics and prediction for a single area
    pub async fn get_area(&self, area_id: &str) -> Result<AreaResponse, ApiError> {
        self.get(&format!("/area/{}", area_id)).await
    }
}
