use serde::{Deserialize, Serialize};

/// Energy saving tips from `GET /api/energy-tips`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyTips {
    #[serde(default)]
    pub tips: Vec<String>,
}
