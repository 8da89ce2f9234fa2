mod charts_card;
mod dashboard;
mod map_card;
mod prediction_card;
mod status_card;
mod tips_card;

pub use dashboard::Dashboard;
