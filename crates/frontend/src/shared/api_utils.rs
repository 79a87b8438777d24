//! Утилиты для работы с API бэкенда
//!
//! Определяет базовый URL бэкенда и настройки дашборда.

/// Адрес бэкенда при локальной разработке
pub const LOCAL_API_BASE: &str = "http://localhost:8080/api";

/// Ключ localStorage, переопределяющий базовый URL API
pub const API_BASE_OVERRIDE_KEY: &str = "dashboardApiBase";

/// Настройки клиента дашборда
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    /// Интервал обновления сводки дашборда
    pub refresh_interval_ms: u32,
    /// Строк на странице таблицы
    pub page_size: usize,
    /// Время показа уведомления
    pub notification_ttl_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: LOCAL_API_BASE.to_string(),
            refresh_interval_ms: 5_000,
            page_size: 10,
            notification_ttl_ms: 4_000,
        }
    }
}

impl DashboardConfig {
    /// Собирает конфиг по текущему адресу страницы
    pub fn from_window() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }
}

/// Базовый URL API для страницы, открытой с `protocol//host`.
///
/// Локальные хосты ходят на фиксированный адрес бэкенда, остальные
/// ожидают API по пути `/api` на том же origin.
pub fn resolve_api_base(protocol: &str, hostname: &str, host: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" || host.is_empty() {
        LOCAL_API_BASE.to_string()
    } else {
        format!("{}//{}/api", protocol, host)
    }
}

/// Получить базовый URL для API запросов
///
/// # Возвращает
/// - значение `dashboardApiBase` из localStorage, если оно есть
/// - `https://example.com/api` для нелокального хоста
/// - `http://localhost:8080/api` в остальных случаях
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return LOCAL_API_BASE.to_string(),
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(url)) = storage.get_item(API_BASE_OVERRIDE_KEY) {
            if !url.trim().is_empty() {
                return url.trim().trim_end_matches('/').to_string();
            }
        }
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_default();
    let host = location.host().unwrap_or_default();
    resolve_api_base(&protocol, &hostname, &host)
}

/// Полный URL API по пути
///
/// # Пример
/// ```ignore
/// let url = api_url(&base, "/metrics/42");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_dev_origin() {
        assert_eq!(
            resolve_api_base("http:", "localhost", "localhost:5500"),
            LOCAL_API_BASE
        );
        assert_eq!(
            resolve_api_base("http:", "127.0.0.1", "127.0.0.1:8080"),
            LOCAL_API_BASE
        );
    }

    #[test]
    fn test_remote_host_uses_same_origin() {
        assert_eq!(
            resolve_api_base("https:", "dash.example.com", "dash.example.com"),
            "https://dash.example.com/api"
        );
        assert_eq!(
            resolve_api_base("http:", "10.0.0.5", "10.0.0.5:8080"),
            "http://10.0.0.5:8080/api"
        );
    }

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(
            api_url("http://localhost:8080/api/", "/metrics"),
            "http://localhost:8080/api/metrics"
        );
        assert_eq!(api_url("/api", "/metrics/3"), "/api/metrics/3");
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval_ms, 5_000);
        assert_eq!(config.page_size, 10);
    }
}
