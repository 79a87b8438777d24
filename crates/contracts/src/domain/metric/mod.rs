pub mod category;

pub use category::{category_color, MetricCategory, DEFAULT_METRIC_COLOR};

use serde::{Deserialize, Serialize};

pub type MetricId = i64;

/// A single named, categorized, timestamped numeric data point as listed by
/// `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    pub category: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 date-time, with or without offset
    pub timestamp: String,
}

impl Metric {
    /// Display colour, falling back to the dashboard default
    pub fn display_color(&self) -> &str {
        self.color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_METRIC_COLOR)
    }
}

/// Body of `POST /metrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMetricRequest {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub color: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_deserialize_optional_fields() {
        let json = r#"{
            "id": 7,
            "name": "Vendas Q1",
            "category": "Vendas",
            "value": 1500.5,
            "timestamp": "2024-03-15T14:02:26"
        }"#;
        let metric: Metric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.id, 7);
        assert_eq!(metric.color, None);
        assert_eq!(metric.description, None);
        assert_eq!(metric.display_color(), DEFAULT_METRIC_COLOR);
    }

    #[test]
    fn test_display_color_prefers_metric_color() {
        let metric = Metric {
            id: 1,
            name: "Tickets".to_string(),
            category: "Suporte".to_string(),
            value: 3.0,
            color: Some("#50C878".to_string()),
            description: None,
            timestamp: "2024-03-15T14:02:26Z".to_string(),
        };
        assert_eq!(metric.display_color(), "#50C878");
    }

    #[test]
    fn test_create_request_serializes_plain_fields() {
        let request = CreateMetricRequest {
            name: "Leads".to_string(),
            category: "Marketing".to_string(),
            value: 42.0,
            color: "#4A90E2".to_string(),
            description: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["name"], "Leads");
        assert_eq!(value["value"], 42.0);
        assert_eq!(value["description"], "");
    }
}
