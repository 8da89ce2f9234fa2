pub mod area;
pub mod calendar;
pub mod client;
pub mod dashboard;
pub mod notifications;
pub mod prediction;
pub mod tips;

pub use client::{ApiClient, ApiError};
