use super::client::{ApiClient, ApiError};
use crate::models::{NotificationResponse, NotificationSignup};

impl ApiClient {
    /// Sign up for stage alerts for an area
    pub async fn signup_notifications(
        &self,
        signup: &NotificationSignup,
    ) -> Result<NotificationResponse, ApiError> {
        self.post("/api/notifications", signup).await
    }
}
