use contracts::dashboards::metrics_summary::DashboardSummary;

/// Тексты четырёх карточек над графиками
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStats {
    pub total_metrics: String,
    pub average_value: String,
    pub top_category: String,
    pub total_value: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_metrics: "0".to_string(),
            average_value: "0.00".to_string(),
            top_category: "-".to_string(),
            total_value: "0.00".to_string(),
        }
    }
}

impl DashboardStats {
    /// Количество и среднее обновляются всегда; топ-категория и сумма
    /// сохраняют прежний текст, если в сводке нет данных.
    pub fn apply_summary(&mut self, summary: &DashboardSummary) {
        self.total_metrics = summary.total_metrics.unwrap_or(0).to_string();
        self.average_value = format!("{:.2}", summary.average_value.unwrap_or(0.0));

        if let Some(top) = summary
            .metrics_by_category
            .as_ref()
            .and_then(|by_category| top_category(by_category.iter()))
        {
            self.top_category = top;
        }

        if let Some(totals) = &summary.category_totals {
            let total: f64 = totals.values().sum();
            self.total_value = format!("{:.2}", total);
        }
    }
}

/// Категория с наибольшим количеством; при равенстве побеждает пришедшая первой
fn top_category<'a>(counts: impl Iterator<Item = (&'a String, &'a u64)>) -> Option<String> {
    let mut best: Option<(&String, u64)> = None;
    for (category, &count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_full_summary() {
        let mut stats = DashboardStats::default();
        stats.apply_summary(&DashboardSummary {
            total_metrics: Some(12),
            average_value: Some(41.666),
            metrics_by_category: Some(IndexMap::from([
                ("Marketing".to_string(), 3),
                ("Vendas".to_string(), 7),
                ("Suporte".to_string(), 2),
            ])),
            category_totals: Some(IndexMap::from([
                ("Marketing".to_string(), 100.5),
                ("Vendas".to_string(), 399.5),
            ])),
            ..Default::default()
        });

        assert_eq!(stats.total_metrics, "12");
        assert_eq!(stats.average_value, "41.67");
        assert_eq!(stats.top_category, "Vendas");
        assert_eq!(stats.total_value, "500.00");
    }

    #[test]
    fn test_partial_summary_keeps_top_category_and_total() {
        let mut stats = DashboardStats::default();
        stats.apply_summary(&DashboardSummary {
            total_metrics: Some(3),
            average_value: Some(2.0),
            metrics_by_category: Some(IndexMap::from([("Suporte".to_string(), 3)])),
            category_totals: Some(IndexMap::from([("Suporte".to_string(), 6.0)])),
            ..Default::default()
        });

        stats.apply_summary(&DashboardSummary {
            metrics_by_category: Some(IndexMap::new()),
            ..Default::default()
        });

        assert_eq!(stats.total_metrics, "0");
        assert_eq!(stats.average_value, "0.00");
        assert_eq!(stats.top_category, "Suporte");
        assert_eq!(stats.total_value, "6.00");
    }

    #[test]
    fn test_tie_keeps_first_category() {
        let counts = IndexMap::from([("Vendas".to_string(), 9), ("Marketing".to_string(), 9)]);
        assert_eq!(top_category(counts.iter()).as_deref(), Some("Vendas"));
    }

    #[test]
    fn test_top_category_follows_payload_order() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"metricsByCategory": {"Vendas": 5, "Marketing": 9, "Financeiro": 9}}"#,
        )
        .unwrap();
        let mut stats = DashboardStats::default();
        stats.apply_summary(&summary);
        assert_eq!(stats.top_category, "Marketing");
    }
}
