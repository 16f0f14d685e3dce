use crate::hooks::{Notification, NotificationState, NotificationType};
use dioxus::prelude::*;

#[component]
pub fn NotificationContainer() -> Element {
    let state = use_context::<Signal<NotificationState>>();
    let notifications = state.read().notifications.clone();

    rsx! {
        div { class: "fixed top-4 right-4 z-[60] space-y-2",
            for notification in notifications.into_iter() {
                NotificationToast {
                    key: "{notification.id}",
                    notification: notification.clone(),
                }
            }
        }
    }
}

#[component]
fn NotificationToast(notification: Notification) -> Element {
    let color_class = match notification.notification_type {
        NotificationType::Success => "bg-emerald-500 text-white",
        NotificationType::Error => "bg-red-500 text-white",
        NotificationType::Info => "bg-sky-500 text-white",
        NotificationType::Warning => "bg-amber-400 text-black",
    };

    rsx! {
        div { class: "px-6 py-4 rounded-lg shadow-lg max-w-sm animate-slideIn {color_class}",
            "{notification.message}"
        }
    }
}
