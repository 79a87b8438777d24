//! Правила полей формы "новая метрика".
//!
//! У каждого поля свой слот ошибки: проверка или правка одного поля
//! не трогает сообщения других.

use contracts::domain::metric::{CreateMetricRequest, MetricCategory, DEFAULT_METRIC_COLOR};
use std::collections::BTreeMap;

pub const NAME_MIN_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Category,
    Value,
    Color,
    Description,
}

impl FieldId {
    pub const REQUIRED: [FieldId; 3] = [FieldId::Name, FieldId::Category, FieldId::Value];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// DOM id of the input, also used for the `<id>Error` message element
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Category => "category",
            FieldId::Value => "value",
            FieldId::Color => "color",
            FieldId::Description => "description",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricForm {
    pub name: String,
    pub category: String,
    pub value: String,
    pub color: String,
    pub description: String,
}

impl Default for MetricForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            value: String::new(),
            color: DEFAULT_METRIC_COLOR.to_string(),
            description: String::new(),
        }
    }
}

impl MetricForm {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Category => &self.category,
            FieldId::Value => &self.value,
            FieldId::Color => &self.color,
            FieldId::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::Category => self.category = value,
            FieldId::Value => self.value = value,
            FieldId::Color => self.color = value,
            FieldId::Description => self.description = value,
        }
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Проверить все обязательные поля; пустой результат означает, что форму можно отправить
    pub fn validate_required(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in FieldId::REQUIRED {
            if let Err(message) = validate_field(field, self.get(field)) {
                errors.set(field, message);
            }
        }
        errors
    }

    /// Тело запроса или ошибки полей, мешающие отправке
    pub fn to_request(&self) -> Result<CreateMetricRequest, FieldErrors> {
        let errors = self.validate_required();
        if !errors.is_empty() {
            return Err(errors);
        }
        let value = self
            .value
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                let mut errors = FieldErrors::default();
                errors.set(FieldId::Value, NOT_A_NUMBER);
                errors
            })?;
        let color = if self.color.trim().is_empty() {
            DEFAULT_METRIC_COLOR.to_string()
        } else {
            self.color.trim().to_string()
        };
        Ok(CreateMetricRequest {
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            value,
            color,
            description: self.description.trim().to_string(),
        })
    }
}

const REQUIRED: &str = "Este campo é obrigatório";
const NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 3 caracteres";
const NOT_A_NUMBER: &str = "Valor deve ser um número";
const NEGATIVE_VALUE: &str = "Valor deve ser positivo";
const NO_CATEGORY: &str = "Selecione uma categoria";

/// Первое нарушенное правило для `field`
pub fn validate_field(field: FieldId, raw: &str) -> Result<(), &'static str> {
    let value = raw.trim();
    if field.is_required() && value.is_empty() {
        return Err(REQUIRED);
    }
    match field {
        FieldId::Name if value.chars().count() < NAME_MIN_CHARS => Err(NAME_TOO_SHORT),
        FieldId::Value => match value.parse::<f64>() {
            Ok(v) if !v.is_finite() => Err(NOT_A_NUMBER),
            Ok(v) if v < 0.0 => Err(NEGATIVE_VALUE),
            Ok(_) => Ok(()),
            Err(_) => Err(NOT_A_NUMBER),
        },
        FieldId::Category if MetricCategory::from_name(value).is_none() => Err(NO_CATEGORY),
        _ => Ok(()),
    }
}

/// По одному слоту ошибки на поле
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    slots: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.slots.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        self.slots.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldId) {
        self.slots.remove(&field);
    }

    /// Перепроверить одно поле и записать результат в его слот
    pub fn revalidate(&mut self, field: FieldId, raw: &str) -> bool {
        match validate_field(field, raw) {
            Ok(()) => {
                self.clear(field);
                true
            }
            Err(message) => {
                self.set(field, message);
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}
