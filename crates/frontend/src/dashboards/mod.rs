pub mod metrics_overview;
