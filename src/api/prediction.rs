use super::client::{ApiClient, ApiError};
use crate::models::{PredictRequest, PredictResponse};

impl ApiClient {
    /// Request a loadshedding prediction. `area_id = None` asks for the
    /// national model.
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        self.post("/predict", request).await
    }
}
