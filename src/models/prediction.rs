use serde::{Deserialize, Serialize};
use std::fmt;

/// Prediction request for `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// `None` requests the national model
    pub area_id: Option<String>,
    pub days_ahead: u32,
}

/// Prediction payload from `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub error: Option<String>,
    pub prediction: Option<Prediction>,
}

/// A single stage prediction, also embedded in area responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub date: String,
    pub predicted_stage: StageValue,
    pub scope: Option<String>,
    pub area_id: Option<String>,
}

impl Prediction {
    /// Scope line for display: "nationally" or "in {area_id}". The `scope`
    /// field wins when present; otherwise an `area_id` implies area scope.
    pub fn scope_text(&self) -> String {
        let scope = self
            .scope
            .clone()
            .unwrap_or_else(|| match self.area_id {
                Some(_) => "area".to_string(),
                None => "national".to_string(),
            });

        if scope == "national" {
            "nationally".to_string()
        } else {
            format!("in {}", self.area_id.as_deref().unwrap_or("the selected area"))
        }
    }
}

/// Stage values arrive as numbers from some model paths and strings from
/// others (label encoding round-trips)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StageValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageValue::Number(n) if n.fract() == 0.0 => write!(f, "{:.0}", n),
            StageValue::Number(n) => write!(f, "{}", n),
            StageValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_serializes_null_area() {
        let request = PredictRequest {
            area_id: None,
            days_ahead: 3,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["area_id"].is_null());
        assert_eq!(json["days_ahead"], 3);
    }

    #[test]
    fn test_prediction_stage_as_number_or_string() {
        let json = r#"{"date": "2026-08-29", "predicted_stage": 4, "scope": "national"}"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.predicted_stage.to_string(), "4");

        let json = r#"{"date": "2026-08-29", "predicted_stage": "2", "area_id": "jhb-4"}"#;
        let prediction: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.predicted_stage.to_string(), "2");
    }

    #[test]
    fn test_prediction_scope_text() {
        let national: Prediction = serde_json::from_str(
            r#"{"date": "2026-08-29", "predicted_stage": 4, "scope": "national"}"#,
        )
        .unwrap();
        assert_eq!(national.scope_text(), "nationally");

        let area: Prediction = serde_json::from_str(
            r#"{"date": "2026-08-29", "predicted_stage": 2, "area_id": "jhb-4"}"#,
        )
        .unwrap();
        assert_eq!(area.scope_text(), "in jhb-4");
    }
}
