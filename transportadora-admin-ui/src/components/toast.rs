use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use transportadora::{Notification, Severity};

pub use dioxus_primitives::toast::ToastProvider;

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Pushes each notification a screen raises onto the shared toast stack,
/// then lets the screen clear it.
pub fn use_notification_toast(notification: Option<Notification>, dismiss: impl FnMut(()) + 'static) {
    let toaster = use_toast();
    let dismiss = use_callback(dismiss);

    use_effect(use_reactive!(|notification| {
        let Some(shown) = notification else {
            return;
        };
        let options = ToastOptions::new().duration(TOAST_DURATION).permanent(false);
        match shown.severity {
            Severity::Success => toaster.success(shown.message, options),
            Severity::Info => toaster.info(shown.message, options),
            Severity::Error => toaster.error(shown.message, options),
        }
        dismiss.call(());
    }));
}
