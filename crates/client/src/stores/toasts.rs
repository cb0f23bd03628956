//! Transient notification store rendered by the `Toaster` component.

use dioxus::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen.
const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub variant: ToastVariant,
}

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

/// Surface an error-style notification.
pub fn notify_error(message: impl Into<String>) {
    push(ToastVariant::Error, message.into());
}

/// Surface a success-style notification.
pub fn notify_success(message: impl Into<String>) {
    push(ToastVariant::Success, message.into());
}

/// Dismiss a toast early (e.g. when clicked).
pub fn dismiss(id: Uuid) {
    TOASTS.write().retain(|t| t.id != id);
}

fn push(variant: ToastVariant, message: String) {
    let id = Uuid::new_v4();
    TOASTS.write().push(Toast {
        id,
        message,
        variant,
    });

    spawn(async move {
        sleep_ms(DISMISS_AFTER_MS).await;
        dismiss(id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
