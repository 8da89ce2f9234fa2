use serde::{Deserialize, Serialize};

/// One day of the calendar payload from `GET /api/calendar/{year}/{month}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub has_shedding: bool,
    pub stage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_days_deserialize() {
        let json = r#"[
            {"day": 1, "has_shedding": false, "stage": 0},
            {"day": 2, "has_shedding": true, "stage": 3}
        ]"#;

        let days: Vec<CalendarDay> = serde_json::from_str(json).unwrap();
        assert_eq!(days.len(), 2);
        assert!(days[1].has_shedding);
        assert_eq!(days[1].stage, 3);
    }
}
