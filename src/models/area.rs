use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::prediction::Prediction;

/// Area payload from `GET /area/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaResponse {
    pub status: String,
    pub message: Option<String>,
    pub stats: Option<AreaStats>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEvent>,
    pub prediction: Option<Prediction>,
}

impl AreaResponse {
    /// The backend reports logical failures through `status`
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Schedule statistics computed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaStats {
    pub average_duration: f64,
    pub total_hours: f64,
    /// Zero-based weekday, displayed one-based
    pub most_common_day: u32,
    pub most_common_hour: u32,
    #[serde(default)]
    pub stages_distribution: BTreeMap<String, u32>,
}

/// A single loadshedding event in an area schedule
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_response_success() {
        let json = r#"{
            "status": "success",
            "stats": {
                "average_duration": 2.5,
                "total_hours": 40.0,
                "most_common_day": 2,
                "most_common_hour": 18,
                "stages_distribution": {"2": 10, "4": 6}
            },
            "schedule": [{"start": "2026-08-03T18:00:00", "end": "2026-08-03T20:30:00"}],
            "prediction": null
        }"#;

        let response: AreaResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        let stats = response.stats.unwrap();
        assert_eq!(stats.most_common_day, 2);
        assert_eq!(stats.stages_distribution.get("2"), Some(&10));
        assert_eq!(response.schedule.len(), 1);
    }

    #[test]
    fn test_area_response_failure_has_no_stats() {
        let json = r#"{"status": "error", "message": "Failed to load area data"}"#;

        let response: AreaResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Failed to load area data"));
        assert!(response.stats.is_none());
        assert!(response.schedule.is_empty());
    }
}
