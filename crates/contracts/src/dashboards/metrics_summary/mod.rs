pub mod dto;

pub use dto::{DashboardSummary, TimeSeriesPoint};
