use serde::{Deserialize, Serialize};

/// Signup request for `POST /api/notifications`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSignup {
    pub email: String,
    pub area: String,
    pub stage: String,
}

/// Signup acknowledgement
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub status: String,
    pub message: Option<String>,
}

impl NotificationResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
