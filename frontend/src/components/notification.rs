use crate::state::notifications::{use_notifications, Notification, NotificationKind};
use leptos::*;

fn toast_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        NotificationKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        NotificationKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let center = use_notifications();
    let id = notification.id;
    let role = match notification.kind {
        NotificationKind::Error => "alert",
        _ => "status",
    };
    view! {
        <div
            class=format!(
                "flex items-start gap-3 border rounded-md shadow px-4 py-3 text-sm {}",
                toast_classes(notification.kind),
            )
            role=role
        >
            <p class="flex-1">{notification.message}</p>
            <button
                type="button"
                aria-label="Dismiss"
                class="opacity-70 hover:opacity-100"
                on:click=move |_| center.dismiss(id)
            >
                "✕"
            </button>
        </div>
    }
}

#[component]
pub fn NotificationToasts() -> impl IntoView {
    let center = use_notifications();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80">
            <For
                each=move || center.items().get()
                key=|item| item.id
                children=move |item| view! { <Toast notification=item/> }
            />
        </div>
    }
}
