use serde::{Deserialize, Serialize};

/// National dashboard payload from `GET /`
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub error: Option<String>,
    pub national_stats: Option<NationalStats>,
    /// National chart payload, carried opaquely
    #[serde(rename = "chartData", default)]
    pub chart_data: Option<serde_json::Value>,
    /// National hotspot payload, carried opaquely
    #[serde(rename = "mapData", default)]
    pub map_data: Option<serde_json::Value>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

/// Current national loadshedding status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalStats {
    pub current_stage: u32,
    pub next_stage: Option<u32>,
    pub updated: String,
}

/// An area the backend knows schedules for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_response_deserializes() {
        let json = r#"{
            "national_stats": {"current_stage": 2, "next_stage": null, "updated": "2026-08-01T10:00:00"},
            "chartData": {},
            "mapData": {},
            "areas": [{"id": "jhb-4", "name": "Johannesburg Ward 4"}]
        }"#;

        let response: DashboardResponse = serde_json::from_str(json).unwrap();
        let stats = response.national_stats.unwrap();
        assert_eq!(stats.current_stage, 2);
        assert_eq!(stats.next_stage, None);
        assert_eq!(response.areas.len(), 1);
        assert_eq!(response.areas[0].id, "jhb-4");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_dashboard_response_error_only() {
        let json = r#"{"error": "Failed to load data", "areas": []}"#;

        let response: DashboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.as_deref(), Some("Failed to load data"));
        assert!(response.national_stats.is_none());
    }
}
