use contracts::domain::metric::{Metric, MetricId};
use leptos::prelude::*;

use super::filter::{apply_filters, FilterInputs, FilterState};
use super::table::{render_rows, TableBody};
use crate::domain::metric::actions::{MetricAction, Notice};
use crate::shared::http::ApiError;
use crate::shared::pagination::{self, PageView};

#[derive(Clone, Debug)]
pub struct MetricListState {
    pub all_metrics: Vec<Metric>,
    pub filtered: Vec<Metric>,

    // Поля фильтра как введены и последний применённый фильтр
    pub inputs: FilterInputs,
    pub applied: FilterState,

    // Клиентская пагинация (с 1)
    pub page: usize,
    pub page_size: usize,

    pub is_loaded: bool,
}

impl MetricListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_metrics: Vec::new(),
            filtered: Vec::new(),
            inputs: FilterInputs::default(),
            applied: FilterState::default(),
            page: 1,
            page_size,
            is_loaded: false,
        }
    }

    fn refilter(&mut self) {
        self.applied = self.inputs.parse();
        self.filtered = apply_filters(&self.all_metrics, &self.applied);
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Заменить весь список, сохранив фильтры и по возможности страницу
    pub fn load_metrics(&mut self, metrics: Vec<Metric>) {
        self.all_metrics = metrics;
        self.is_loaded = true;
        self.refilter();
        self.page = pagination::clamp_page(self.page, self.total_pages());
    }

    /// `GET /metrics` не удался: убрать индикатор загрузки, оставить прежние данные
    pub fn on_load_failed(&mut self) {
        self.is_loaded = true;
    }

    pub fn apply_filters(&mut self) {
        self.refilter();
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.inputs = FilterInputs::default();
        self.refilter();
        self.page = 1;
    }

    pub fn search(&mut self, term: String) {
        self.inputs.search = term;
        self.refilter();
        self.page = 1;
    }

    /// ±1, ignored when it would leave `[1, total_pages]`
    pub fn change_page(&mut self, direction: i32) {
        self.page = pagination::step_page(self.page, direction, self.total_pages());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
    }

    pub fn page_view(&self) -> PageView<Metric> {
        pagination::paginate(&self.filtered, self.page, self.page_size)
    }

    pub fn table_body(&self) -> TableBody {
        render_rows(pagination::page_slice(&self.filtered, self.page, self.page_size))
    }

    /// Применить результат `DELETE /metrics/{id}`.
    ///
    /// Локальное состояние меняется только при успехе; затем вызывающий
    /// перезагружает список с сервера.
    pub fn on_delete_result(&mut self, id: MetricId, result: &Result<(), ApiError>) -> Notice {
        if result.is_ok() {
            self.all_metrics.retain(|m| m.id != id);
            self.filtered.retain(|m| m.id != id);
            self.page = pagination::clamp_page(self.page, self.total_pages());
        }
        MetricAction::Delete.notice_for(result)
    }
}

pub fn create_state(page_size: usize) -> RwSignal<MetricListState> {
    RwSignal::new(MetricListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(n: usize) -> Vec<Metric> {
        (1..=n)
            .map(|i| Metric {
                id: i as i64,
                name: if i % 2 == 0 {
                    format!("Vendas {}", i)
                } else {
                    format!("Marketing {}", i)
                },
                category: if i % 2 == 0 { "Vendas" } else { "Marketing" }.to_string(),
                value: i as f64,
                color: None,
                description: None,
                timestamp: format!("2024-01-{:02}T10:00:00", i.min(28)),
            })
            .collect()
    }

    #[test]
    fn test_twelve_metrics_page_size_ten() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(12));

        let first = state.page_view();
        assert_eq!(first.items.len(), 10);
        assert!(first.has_next());

        state.change_page(1);
        let second = state.page_view();
        assert_eq!(state.page, 2);
        assert_eq!(second.items.len(), 2);
        assert!(!second.has_next());

        state.change_page(1);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = MetricListState::new(2);
        state.load_metrics(metrics(12));
        state.go_to_page(4);
        assert_eq!(state.page, 4);

        state.search("VENDAS".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered.len(), 6);
        assert!(state.filtered.iter().all(|m| m.category == "Vendas"));
    }

    #[test]
    fn test_filters_apply_only_on_request() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(12));

        state.inputs.category = "Marketing".to_string();
        assert_eq!(state.filtered.len(), 12);

        state.apply_filters();
        assert_eq!(state.filtered.len(), 6);
        assert_eq!(state.applied.active_count(), 1);

        state.clear_filters();
        assert_eq!(state.filtered.len(), 12);
        assert_eq!(state.inputs, FilterInputs::default());
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(12));
        state.go_to_page(99);
        assert_eq!(state.page, 2);
        state.go_to_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_reload_keeps_page_in_range() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(12));
        state.go_to_page(2);
        state.load_metrics(metrics(5));
        assert_eq!(state.page, 1);
        state.load_metrics(Vec::new());
        assert_eq!(state.page, 1);
        assert_eq!(state.table_body(), TableBody::Placeholder);
    }

    #[test]
    fn test_failed_first_load_stops_loading() {
        let mut state = MetricListState::new(10);
        state.on_load_failed();
        assert!(state.is_loaded);
        assert_eq!(state.table_body(), TableBody::Placeholder);

        state.load_metrics(metrics(3));
        state.on_load_failed();
        assert_eq!(state.all_metrics.len(), 3);
    }

    #[test]
    fn test_forbidden_delete_keeps_metric() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(3));

        let notice = state.on_delete_result(2, &Err(ApiError::from_status(403)));
        assert!(notice.open_login);
        assert_eq!(notice.message, "Você precisa fazer login para deletar métricas.");
        assert!(state.all_metrics.iter().any(|m| m.id == 2));
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn test_successful_delete_removes_metric() {
        let mut state = MetricListState::new(10);
        state.load_metrics(metrics(3));

        let notice = state.on_delete_result(2, &Ok(()));
        assert!(!notice.open_login);
        assert!(state.all_metrics.iter().all(|m| m.id != 2));
        assert_eq!(state.filtered.len(), 2);
    }
}
