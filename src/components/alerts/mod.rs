mod page;

pub use page::AlertsPage;
