use super::client::{ApiClient, ApiError};
use crate::models::EnergyTips;

impl ApiClient {
    /// Get energy saving tips
    pub async fn get_energy_tips(&self) -> Result<EnergyTips, ApiError> {
        self.get("/api/energy-tips").await
    }
}
