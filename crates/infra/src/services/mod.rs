mod notifier;

pub use notifier::{
    INotifier, LogNotifier, Notification, NotifyError, WebhookNotifier, WEBHOOK_KEY_HEADER,
};
