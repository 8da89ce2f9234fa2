pub mod alerts;
pub mod calculator;
pub mod calendar;
pub mod dashboard;
pub mod layout;

pub use alerts::AlertsPage;
pub use calculator::CalculatorPage;
pub use calendar::CalendarPage;
pub use dashboard::Dashboard;
