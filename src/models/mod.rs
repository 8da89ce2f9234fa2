pub mod area;
pub mod calendar;
pub mod dashboard;
pub mod notification;
pub mod prediction;
pub mod tips;

pub use area::{AreaResponse, AreaStats, ScheduleEvent};
pub use calendar::CalendarDay;
pub use dashboard::{Area, DashboardResponse, NationalStats};
pub use notification::{NotificationResponse, NotificationSignup};
pub use prediction::{PredictRequest, PredictResponse, Prediction, StageValue};
pub use tips::EnergyTips;
