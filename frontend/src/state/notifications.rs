use leptos::*;
use std::time::Duration;
use uuid::Uuid;

pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Transient toasts shared through context; each one dismisses itself after
/// [`AUTO_DISMISS_AFTER`] in the browser.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = notification.id;
        match kind {
            NotificationKind::Error => log::warn!("{}", notification.message),
            _ => log::info!("{}", notification.message),
        }
        self.items.update(|items| items.push(notification));
        schedule_dismiss(*self, id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Info, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|item| item.id != id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(center: NotificationCenter, id: Uuid) {
    set_timeout(move || center.dismiss(id), AUTO_DISMISS_AFTER);
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_center: NotificationCenter, _id: Uuid) {}

pub fn provide_notifications() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    center
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_appends_and_dismiss_removes() {
        with_runtime(|| {
            let center = NotificationCenter::new();
            let first = center.success("Saved");
            let second = center.error("Failed");
            let items = center.items().get();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, NotificationKind::Success);
            assert_eq!(items[1].message, "Failed");

            center.dismiss(first);
            let items = center.items().get();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, second);
        });
    }

    #[test]
    fn use_notifications_reads_provided_center() {
        with_runtime(|| {
            let provided = provide_notifications();
            provided.info("hello");
            assert_eq!(use_notifications().items().get().len(), 1);
        });
    }
}
