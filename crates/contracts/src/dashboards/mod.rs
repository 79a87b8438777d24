pub mod metrics_summary;
