use crate::domain::metric::Metric;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Response of `GET /metrics/dashboard`
///
/// Every field is optional: a field missing from the payload leaves the
/// corresponding chart or stat card untouched on the client. Category maps
/// keep the order in which the server sent their keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_metrics: Option<u64>,
    #[serde(default)]
    pub average_value: Option<f64>,
    /// Number of metrics per category
    #[serde(default)]
    pub metrics_by_category: Option<IndexMap<String, u64>>,
    /// Sum of values per category
    #[serde(default)]
    pub category_totals: Option<IndexMap<String, f64>>,
    #[serde(default)]
    pub top_metrics: Option<Vec<Metric>>,
    #[serde(default)]
    pub time_series: Option<Vec<TimeSeriesPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: String,
    pub category: String,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_summary() {
        let json = r##"{
            "totalMetrics": 3,
            "averageValue": 12.5,
            "metricsByCategory": {"Vendas": 2, "Marketing": 1},
            "categoryTotals": {"Vendas": 30.0, "Marketing": 7.5},
            "topMetrics": [
                {"id": 1, "name": "Vendas Q1", "category": "Vendas", "value": 20.0,
                 "color": "#4A90E2", "timestamp": "2024-03-15T10:00:00"}
            ],
            "timeSeries": [
                {"timestamp": "2024-03-15T10:00:00", "category": "Vendas", "value": 20.0}
            ]
        }"##;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_metrics, Some(3));
        assert_eq!(summary.average_value, Some(12.5));
        let by_category = summary.metrics_by_category.unwrap();
        assert_eq!(by_category.get("Vendas"), Some(&2));
        assert_eq!(summary.top_metrics.unwrap().len(), 1);
        assert_eq!(summary.time_series.unwrap()[0].category, "Vendas");
    }

    #[test]
    fn test_category_maps_keep_payload_order() {
        let json = r#"{
            "metricsByCategory": {"Vendas": 5, "Marketing": 9, "Financeiro": 9},
            "categoryTotals": {"Suporte": 1.0, "Financeiro": 2.0}
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = summary
            .metrics_by_category
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["Vendas", "Marketing", "Financeiro"]);
        let totals: Vec<&str> = summary
            .category_totals
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(totals, vec!["Suporte", "Financeiro"]);
    }

    #[test]
    fn test_missing_fields_are_none() {
        let summary: DashboardSummary = serde_json::from_str(r#"{"totalMetrics": 0}"#).unwrap();
        assert_eq!(summary.total_metrics, Some(0));
        assert!(summary.metrics_by_category.is_none());
        assert!(summary.category_totals.is_none());
        assert!(summary.top_metrics.is_none());
        assert!(summary.time_series.is_none());
    }
}
