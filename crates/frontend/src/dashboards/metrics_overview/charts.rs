//! Преобразование `DashboardSummary` в данные четырёх графиков дашборда.
//!
//! Если поля для графика в сводке нет, график сохраняет прежнюю модель,
//! так что неполный ответ не очищает графики.

use contracts::dashboards::metrics_summary::{DashboardSummary, TimeSeriesPoint};
use contracts::domain::metric::{category_color, Metric, DEFAULT_METRIC_COLOR};
use serde::Serialize;
use serde_json::{json, Value};
use indexmap::IndexMap;

use crate::shared::date_utils::format_time;

/// Цвета секторов doughnut, по кругу по индексу
pub const PALETTE: [&str; 5] = ["#4A90E2", "#7B68EE", "#50C878", "#F39C12", "#E74C3C"];

const LINE_TENSION: f64 = 0.4;
const LINE_FILL_ALPHA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
}

/// A single colour or one colour per data point
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ChartColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ChartColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    fn bars(label: Option<&str>, data: Vec<f64>, background_color: ChartColor) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            background_color,
            border_color: None,
            tension: None,
        }
    }
}

/// Labels plus datasets, i.e. the `data` object of a Chart.js chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartModel {
    #[serde(skip)]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartModel {
    pub fn empty(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }
}

pub fn category_distribution(by_category: &IndexMap<String, u64>) -> ChartModel {
    let labels: Vec<String> = by_category.keys().cloned().collect();
    let colors = (0..labels.len())
        .map(|i| PALETTE[i % PALETTE.len()].to_string())
        .collect();
    let data = by_category.values().map(|&count| count as f64).collect();

    ChartModel {
        kind: ChartKind::Doughnut,
        labels,
        datasets: vec![Dataset::bars(None, data, ChartColor::PerPoint(colors))],
    }
}

/// Одна линия на категорию, в порядке первого появления.
///
/// Подписи X покрывают весь ряд, а каждая линия хранит только точки своей
/// категории, поэтому линии прижаты к началу общей оси.
pub fn time_series(points: &[TimeSeriesPoint]) -> ChartModel {
    let labels = points.iter().map(|p| format_time(&p.timestamp)).collect();

    let mut categories: Vec<&str> = Vec::new();
    for point in points {
        if !categories.contains(&point.category.as_str()) {
            categories.push(&point.category);
        }
    }

    let datasets = categories
        .into_iter()
        .map(|category| Dataset {
            label: Some(category.to_string()),
            data: points
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.value)
                .collect(),
            background_color: ChartColor::Single(category_color(category, LINE_FILL_ALPHA)),
            border_color: Some(ChartColor::Single(category_color(category, 1.0))),
            tension: Some(LINE_TENSION),
        })
        .collect();

    ChartModel {
        kind: ChartKind::Line,
        labels,
        datasets,
    }
}

pub fn top_metrics(metrics: &[Metric]) -> ChartModel {
    let labels = metrics.iter().map(|m| m.name.clone()).collect();
    let data = metrics.iter().map(|m| m.value).collect();
    let colors = metrics
        .iter()
        .map(|m| m.display_color().to_string())
        .collect();

    ChartModel {
        kind: ChartKind::Bar,
        labels,
        datasets: vec![Dataset::bars(
            Some("Valor"),
            data,
            ChartColor::PerPoint(colors),
        )],
    }
}

pub fn category_totals(totals: &IndexMap<String, f64>) -> ChartModel {
    ChartModel {
        kind: ChartKind::Bar,
        labels: totals.keys().cloned().collect(),
        datasets: vec![Dataset::bars(
            Some("Total"),
            totals.values().copied().collect(),
            ChartColor::Single(DEFAULT_METRIC_COLOR.to_string()),
        )],
    }
}

fn tooltip() -> Value {
    json!({
        "backgroundColor": "rgba(0, 0, 0, 0.8)",
        "padding": 12,
        "titleFont": { "size": 14, "weight": "bold" },
        "bodyFont": { "size": 13 },
        "borderColor": "rgba(74, 144, 226, 0.5)",
        "borderWidth": 1
    })
}

fn dark_axes() -> Value {
    let axis = json!({
        "grid": { "color": "rgba(255, 255, 255, 0.05)" },
        "ticks": { "color": "rgba(232, 234, 237, 0.7)" }
    });
    let mut y = axis.clone();
    y["beginAtZero"] = json!(true);
    json!({ "x": axis, "y": y })
}

/// Chart.js `options` for a chart kind (dark theme)
pub fn chart_options(kind: ChartKind) -> Value {
    match kind {
        ChartKind::Doughnut => json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "plugins": {
                "legend": { "position": "bottom" },
                "tooltip": tooltip()
            }
        }),
        ChartKind::Line => json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "interaction": { "mode": "index", "intersect": false },
            "scales": dark_axes(),
            "plugins": {
                "legend": {
                    "position": "top",
                    "labels": { "color": "rgba(232, 234, 237, 0.9)", "padding": 15 }
                },
                "tooltip": tooltip()
            }
        }),
        ChartKind::Bar => json!({
            "responsive": true,
            "maintainAspectRatio": true,
            "scales": dark_axes(),
            "plugins": {
                "legend": { "labels": { "color": "rgba(232, 234, 237, 0.9)" } },
                "tooltip": tooltip()
            }
        }),
    }
}

/// Full `new Chart(canvas, config)` argument for a model
pub fn chart_config(model: &ChartModel) -> Value {
    json!({
        "type": model.kind,
        "data": model,
        "options": chart_options(model.kind),
    })
}

/// Текущие модели четырёх графиков
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardCharts {
    pub category: ChartModel,
    pub time_series: ChartModel,
    pub top_metrics: ChartModel,
    pub category_totals: ChartModel,
}

impl Default for DashboardCharts {
    fn default() -> Self {
        Self {
            category: ChartModel::empty(ChartKind::Doughnut),
            time_series: ChartModel::empty(ChartKind::Line),
            top_metrics: ChartModel::empty(ChartKind::Bar),
            category_totals: ChartModel::empty(ChartKind::Bar),
        }
    }
}

impl DashboardCharts {
    pub fn apply_summary(&mut self, summary: &DashboardSummary) {
        if let Some(by_category) = &summary.metrics_by_category {
            self.category = category_distribution(by_category);
        }
        if let Some(points) = summary.time_series.as_deref().filter(|p| !p.is_empty()) {
            self.time_series = time_series(points);
        }
        if let Some(metrics) = summary.top_metrics.as_deref().filter(|m| !m.is_empty()) {
            self.top_metrics = top_metrics(metrics);
        }
        if let Some(totals) = &summary.category_totals {
            self.category_totals = category_totals(totals);
        }
    }
}
