pub mod cart;
pub mod notifications;

pub use cart::use_cart;
pub use notifications::{
    Notification, NotificationContext, NotificationState, NotificationType, use_notifications,
};
