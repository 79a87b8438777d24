use contracts::domain::metric::{CreateMetricRequest, Metric, MetricId};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::export::ExportFormat;
use crate::shared::http::{self, with_auth, ApiError};

/// `GET /metrics`
pub async fn fetch_metrics(api_base: &str) -> Result<Vec<Metric>, ApiError> {
    let response = http::send(Request::get(&api_url(api_base, "/metrics"))).await?;
    http::read_json(response).await
}

/// `POST /metrics` (bearer)
pub async fn create_metric(
    api_base: &str,
    authorization: Option<&str>,
    request: &CreateMetricRequest,
) -> Result<Metric, ApiError> {
    let response = with_auth(Request::post(&api_url(api_base, "/metrics")), authorization)
        .json(request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response = http::ensure_success(response)?;
    http::read_json(response).await
}

/// `DELETE /metrics/{id}` (bearer)
pub async fn delete_metric(
    api_base: &str,
    authorization: Option<&str>,
    id: MetricId,
) -> Result<(), ApiError> {
    let url = api_url(api_base, &format!("/metrics/{}", id));
    http::send(with_auth(Request::delete(&url), authorization)).await?;
    Ok(())
}

/// `GET /export/excel` or `GET /export/pdf` (bearer); returns the file bytes
pub async fn export_metrics(
    api_base: &str,
    authorization: Option<&str>,
    format: ExportFormat,
) -> Result<Vec<u8>, ApiError> {
    let request = with_auth(Request::get(&api_url(api_base, format.path())), authorization);
    let response = http::send(request).await?;
    http::read_bytes(response).await
}
