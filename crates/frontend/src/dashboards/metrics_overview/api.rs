use contracts::dashboards::metrics_summary::DashboardSummary;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{self, ApiError};

/// `GET /metrics/dashboard`
pub async fn fetch_dashboard(api_base: &str) -> Result<DashboardSummary, ApiError> {
    let response = http::send(Request::get(&api_url(api_base, "/metrics/dashboard"))).await?;
    http::read_json(response).await
}
