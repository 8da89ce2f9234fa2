mod page;

pub use page::CalculatorPage;
