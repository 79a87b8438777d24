//! Fixed category catalogue shared by the metric form, the filter panel and
//! the time-series chart colours.

use serde::{Deserialize, Serialize};

pub const DEFAULT_METRIC_COLOR: &str = "#4A90E2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    Vendas,
    Marketing,
    Suporte,
    Desenvolvimento,
    Financeiro,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Vendas,
        MetricCategory::Marketing,
        MetricCategory::Suporte,
        MetricCategory::Desenvolvimento,
        MetricCategory::Financeiro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Vendas => "Vendas",
            MetricCategory::Marketing => "Marketing",
            MetricCategory::Suporte => "Suporte",
            MetricCategory::Desenvolvimento => "Desenvolvimento",
            MetricCategory::Financeiro => "Financeiro",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }

    fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MetricCategory::Vendas => (74, 144, 226),
            MetricCategory::Marketing => (123, 104, 238),
            MetricCategory::Suporte => (80, 200, 120),
            MetricCategory::Desenvolvimento => (243, 156, 18),
            MetricCategory::Financeiro => (231, 76, 60),
        }
    }
}

/// `rgba(...)` colour for a category name; unknown categories get the default blue.
pub fn category_color(category: &str, alpha: f64) -> String {
    let (r, g, b) = MetricCategory::from_name(category)
        .map(|c| c.rgb())
        .unwrap_or((74, 144, 226));
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_catalogue() {
        for category in MetricCategory::ALL {
            assert_eq!(MetricCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(MetricCategory::from_name("vendas"), None);
        assert_eq!(MetricCategory::from_name(""), None);
    }

    #[test]
    fn test_category_color() {
        assert_eq!(category_color("Marketing", 1.0), "rgba(123, 104, 238, 1)");
        assert_eq!(category_color("Suporte", 0.1), "rgba(80, 200, 120, 0.1)");
        assert_eq!(category_color("Outro", 1.0), "rgba(74, 144, 226, 1)");
    }
}
