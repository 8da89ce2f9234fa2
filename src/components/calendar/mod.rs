mod page;

pub use page::CalendarPage;
