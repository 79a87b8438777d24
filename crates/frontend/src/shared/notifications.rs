//! Всплывающие уведомления (toasts).
//!
//! `NotificationService` лежит в контексте; каждое уведомление само
//! удаляется по истечении TTL.

use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
            NotificationKind::Info => "notification notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            ttl_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));

        let queue = self.queue;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Стек активных уведомлений, рендерится один раз в корне приложения
#[component]
pub fn NotificationStack() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-stack">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=format!("{} show", n.kind.class()) on:click=move |_| service.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("Filtros aplicados", NotificationKind::Success);
        let b = queue.push("Filtros limpos", NotificationKind::Info);
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[1].kind, NotificationKind::Info);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("um", NotificationKind::Info);
        let b = queue.push("dois", NotificationKind::Error);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
    }
}
