pub mod chart_canvas;
pub mod dashboard;

pub use dashboard::MetricsOverview;
