use dioxus::prelude::*;
use std::collections::VecDeque;

const MAX_VISIBLE: usize = 3;
const TOAST_SECONDS: u64 = 4;

#[derive(Clone, PartialEq, Debug)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: usize,
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, PartialEq, Default)]
pub struct NotificationState {
    pub notifications: VecDeque<Notification>,
    next_id: usize,
}

impl NotificationState {
    fn push(&mut self, message: String, notification_type: NotificationType) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.notifications.push_back(Notification {
            id,
            message,
            notification_type,
        });
        if self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
        id
    }
}

/// Toasts for validation problems, failed requests and export results.
#[derive(Copy, Clone)]
pub struct NotificationContext {
    state: Signal<NotificationState>,
}

impl NotificationContext {
    pub fn show(&mut self, message: String, notification_type: NotificationType) {
        let id = self.state.write().push(message, notification_type);

        let mut state = self.state;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECONDS)).await;
            state.write().notifications.retain(|n| n.id != id);
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationType::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationType::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationType::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message.into(), NotificationType::Warning);
    }
}

pub fn use_notifications() -> NotificationContext {
    let state = use_context::<Signal<NotificationState>>();
    NotificationContext { state }
}
