//! Действия пользователя над бэкендом и уведомления по их итогам.

use crate::shared::export::ExportFormat;
use crate::shared::http::ApiError;
use crate::shared::notifications::{NotificationKind, NotificationService};
use crate::system::auth::context::AuthContext;

/// Показывается при ошибке `GET /metrics`; чтение списка не требует входа
pub const LOAD_LIST_FAILED: &str = "Erro ao carregar métricas";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricAction {
    Create,
    Delete,
    Export(ExportFormat),
}

/// Что показать UI после завершения действия
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
    /// Открыть окно логина
    pub open_login: bool,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            open_login: false,
        }
    }

    fn error(message: impl Into<String>, open_login: bool) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            open_login,
        }
    }

    /// Показать уведомление, а при ошибке авторизации и окно логина
    pub fn present(&self, notifications: &NotificationService, auth: &AuthContext) {
        notifications.notify(self.message.clone(), self.kind);
        if self.open_login {
            auth.open_login();
        }
    }
}

impl MetricAction {
    pub fn success_notice(&self) -> Notice {
        match self {
            MetricAction::Create => Notice::success("Métrica adicionada com sucesso!"),
            MetricAction::Delete => Notice::success("Métrica deletada com sucesso!"),
            MetricAction::Export(format) => {
                Notice::success(format!("{} exportado com sucesso!", format.label()))
            }
        }
    }

    /// 401/403 просят войти; остальное общая ошибка
    pub fn failure_notice(&self, error: &ApiError) -> Notice {
        if error.is_auth_required() {
            let what = match self {
                MetricAction::Create => "adicionar métricas",
                MetricAction::Delete => "deletar métricas",
                MetricAction::Export(_) => "exportar dados",
            };
            return Notice::error(format!("Você precisa fazer login para {}.", what), true);
        }

        let message = match self {
            MetricAction::Create => "Erro ao adicionar métrica".to_string(),
            MetricAction::Delete => "Erro ao deletar métrica".to_string(),
            MetricAction::Export(format) => format!("Erro ao exportar {}", format.label()),
        };
        Notice::error(message, false)
    }

    pub fn notice_for<T>(&self, result: &Result<T, ApiError>) -> Notice {
        match result {
            Ok(_) => self.success_notice(),
            Err(e) => self.failure_notice(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_open_login() {
        for status in [401, 403] {
            let notice = MetricAction::Delete.failure_notice(&ApiError::from_status(status));
            assert!(notice.open_login);
            assert_eq!(notice.kind, NotificationKind::Error);
            assert_eq!(
                notice.message,
                "Você precisa fazer login para deletar métricas."
            );
        }
    }

    #[test]
    fn test_every_guarded_action_prompts_login() {
        let actions = [
            MetricAction::Create,
            MetricAction::Delete,
            MetricAction::Export(ExportFormat::Excel),
        ];
        for action in actions {
            assert!(action.failure_notice(&ApiError::from_status(401)).open_login);
        }
        assert_eq!(LOAD_LIST_FAILED, "Erro ao carregar métricas");
    }

    #[test]
    fn test_export_messages() {
        let excel = MetricAction::Export(ExportFormat::Excel);
        assert_eq!(excel.success_notice().message, "Excel exportado com sucesso!");
        let notice = excel.failure_notice(&ApiError::Status(500));
        assert_eq!(notice.message, "Erro ao exportar Excel");
        assert!(!notice.open_login);

        let pdf = MetricAction::Export(ExportFormat::Pdf);
        assert_eq!(
            pdf.failure_notice(&ApiError::Unauthorized(401)).message,
            "Você precisa fazer login para exportar dados."
        );
    }

    #[test]
    fn test_transport_error_is_generic() {
        let notice = MetricAction::Create.failure_notice(&ApiError::Transport("offline".into()));
        assert_eq!(notice.message, "Erro ao adicionar métrica");
        assert!(!notice.open_login);
    }
}
