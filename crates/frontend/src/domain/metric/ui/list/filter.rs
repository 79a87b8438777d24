//! Поиск и фильтры по списку метрик в памяти.

use contracts::domain::metric::Metric;

use crate::shared::date_utils::{date_part, is_iso_date};

/// Значения полей фильтра как они введены
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterInputs {
    pub search: String,
    pub category: String,
    pub min_value: String,
    pub max_value: String,
    pub start_date: String,
    pub end_date: String,
}

impl FilterInputs {
    /// Разбор полей; пустые и некорректные значения не фильтруют
    pub fn parse(&self) -> FilterState {
        FilterState {
            search_term: non_empty(&self.search).map(|s| s.to_lowercase()),
            category: non_empty(&self.category),
            min_value: parse_number(&self.min_value),
            max_value: parse_number(&self.max_value),
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Lowercased, trimmed search term
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// YYYY-MM-DD
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Сколько фильтров сейчас сужают список
    pub fn active_count(&self) -> usize {
        [
            self.search_term.is_some(),
            self.category.is_some(),
            self.min_value.is_some(),
            self.max_value.is_some(),
            self.start_date.is_some(),
            self.end_date.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    /// Должны выполняться все условия
    pub fn matches(&self, metric: &Metric) -> bool {
        if let Some(term) = &self.search_term {
            let in_description = metric
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(term))
                .unwrap_or(false);
            let matches_search = metric.name.to_lowercase().contains(term)
                || metric.category.to_lowercase().contains(term)
                || in_description;
            if !matches_search {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &metric.category != category {
                return false;
            }
        }

        if let Some(min) = self.min_value {
            if metric.value < min {
                return false;
            }
        }

        if let Some(max) = self.max_value {
            if metric.value > max {
                return false;
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            // Неразборчивая метка времени не проходит фильтр по дате
            let Some(date) = date_part(&metric.timestamp) else {
                return false;
            };
            if let Some(start) = &self.start_date {
                if date.as_str() < start.as_str() {
                    return false;
                }
            }
            if let Some(end) = &self.end_date {
                if date.as_str() > end.as_str() {
                    return false;
                }
            }
        }

        true
    }
}

/// Элементы `all`, прошедшие все фильтры, в исходном порядке
pub fn apply_filters(all: &[Metric], state: &FilterState) -> Vec<Metric> {
    if state.is_empty() {
        return all.to_vec();
    }
    all.iter().filter(|m| state.matches(m)).cloned().collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    is_iso_date(trimmed).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(id: i64, name: &str, category: &str, value: f64, timestamp: &str) -> Metric {
        Metric {
            id,
            name: name.to_string(),
            category: category.to_string(),
            value,
            color: None,
            description: None,
            timestamp: timestamp.to_string(),
        }
    }

    fn sample() -> Vec<Metric> {
        vec![
            metric(1, "Vendas Q1", "Vendas", 1500.0, "2024-01-10T09:00:00"),
            metric(2, "Marketing Q1", "Marketing", 300.0, "2024-02-05T10:00:00"),
            metric(3, "Tickets abertos", "Suporte", 42.0, "2024-03-01T11:00:00"),
            metric(4, "Vendas Q2", "Vendas", 1800.0, "2024-04-12T12:00:00"),
            Metric {
                description: Some("Campanha de VENDAS online".to_string()),
                ..metric(5, "Leads", "Marketing", 75.5, "2024-04-20T08:30:00")
            },
        ]
    }

    fn ids(metrics: &[Metric]) -> Vec<i64> {
        metrics.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_empty_filter_returns_input() {
        let all = sample();
        let result = apply_filters(&all, &FilterInputs::default().parse());
        assert_eq!(result, all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = sample();
        let state = FilterInputs {
            search: "  vendas ".to_string(),
            ..Default::default()
        }
        .parse();
        let result = apply_filters(&all, &state);
        assert_eq!(ids(&result), vec![1, 4, 5]);
        assert!(result.iter().all(|m| m.name != "Marketing Q1"));
    }

    #[test]
    fn test_category_filter_partitions_list() {
        let all = sample();
        let mut categories: Vec<String> = all.iter().map(|m| m.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let mut union = Vec::new();
        for category in &categories {
            let state = FilterState {
                category: Some(category.clone()),
                ..Default::default()
            };
            let result = apply_filters(&all, &state);
            assert!(result.iter().all(|m| &m.category == category));
            union.extend(ids(&result));
        }
        union.sort();
        assert_eq!(union, ids(&all));
    }

    #[test]
    fn test_value_range() {
        let all = sample();
        let state = FilterInputs {
            min_value: "75.5".to_string(),
            max_value: "1500".to_string(),
            ..Default::default()
        }
        .parse();
        assert_eq!(ids(&apply_filters(&all, &state)), vec![1, 2, 5]);
    }

    #[test]
    fn test_malformed_numbers_are_ignored() {
        let all = sample();
        let state = FilterInputs {
            min_value: "abc".to_string(),
            max_value: "NaN".to_string(),
            ..Default::default()
        }
        .parse();
        assert!(state.is_empty());
        assert_eq!(apply_filters(&all, &state).len(), all.len());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let all = sample();
        let state = FilterInputs {
            start_date: "2024-02-05".to_string(),
            end_date: "2024-04-12".to_string(),
            ..Default::default()
        }
        .parse();
        assert_eq!(ids(&apply_filters(&all, &state)), vec![2, 3, 4]);
    }

    #[test]
    fn test_malformed_date_is_ignored() {
        let state = FilterInputs {
            start_date: "05/02/2024".to_string(),
            ..Default::default()
        }
        .parse();
        assert_eq!(state.start_date, None);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let all = sample();
        let state = FilterInputs {
            search: "q".to_string(),
            category: "Vendas".to_string(),
            min_value: "1600".to_string(),
            ..Default::default()
        }
        .parse();
        assert_eq!(ids(&apply_filters(&all, &state)), vec![4]);
        assert_eq!(state.active_count(), 3);
    }
}
