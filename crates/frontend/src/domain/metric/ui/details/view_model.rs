use super::validation::{FieldErrors, FieldId, MetricForm};
use contracts::domain::metric::CreateMetricRequest;
use leptos::prelude::*;

/// ViewModel формы "новая метрика"
#[derive(Clone, Copy)]
pub struct MetricFormViewModel {
    pub form: RwSignal<MetricForm>,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
}

impl MetricFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MetricForm::default()),
            errors: RwSignal::new(FieldErrors::default()),
            submitting: RwSignal::new(false),
        }
    }

    /// Любая правка сразу очищает ошибку поля
    pub fn on_input(&self, field: FieldId, value: String) {
        self.form.update(|f| f.set(field, value));
        self.errors.update(|e| e.clear(field));
    }

    /// Валидация при потере фокуса
    pub fn on_blur(&self, field: FieldId) {
        let raw = self.form.with_untracked(|f| f.get(field).to_string());
        self.errors.update(|e| {
            e.revalidate(field, &raw);
        });
    }

    pub fn error_for(&self, field: FieldId) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }

    pub fn description_len(&self) -> usize {
        self.form.with(|f| f.description_len())
    }

    /// Проверить все обязательные поля; вернуть тело запроса, если можно отправлять
    pub fn prepare_submit(&self) -> Option<CreateMetricRequest> {
        match self.form.with_untracked(|f| f.to_request()) {
            Ok(request) => Some(request),
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn reset(&self) {
        self.form.set(MetricForm::default());
        self.errors.set(FieldErrors::default());
    }
}

impl Default for MetricFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
