use contracts::domain::metric::{Metric, MetricId};

use crate::shared::date_utils::format_datetime;

pub const EMPTY_TABLE_MESSAGE: &str = "Nenhuma métrica encontrada";

/// Строка таблицы для рендера
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    /// Кого удаляет кнопка в строке
    pub id: MetricId,
    pub name: String,
    pub category: String,
    pub color: String,
    pub value: String,
    pub timestamp: String,
}

impl From<&Metric> for MetricRow {
    fn from(metric: &Metric) -> Self {
        Self {
            id: metric.id,
            name: metric.name.clone(),
            category: metric.category.clone(),
            color: metric.display_color().to_string(),
            value: format!("{:.2}", metric.value),
            timestamp: format_datetime(&metric.timestamp),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// Single full-width row with `EMPTY_TABLE_MESSAGE`
    Placeholder,
    Rows(Vec<MetricRow>),
}

/// Текущая страница в виде строк таблицы
pub fn render_rows(page: &[Metric]) -> TableBody {
    if page.is_empty() {
        TableBody::Placeholder
    } else {
        TableBody::Rows(page.iter().map(MetricRow::from).collect())
    }
}
