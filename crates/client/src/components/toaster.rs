//! Toast overlay rendered once at the app root.

use dioxus::prelude::*;

use crate::components::icons::XIcon;
use crate::stores::{dismiss, ToastVariant, TOASTS};

#[component]
pub fn Toaster() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.variant {
                        ToastVariant::Error => {
                            "flex items-center justify-between rounded-lg border border-destructive/50 bg-card p-4 text-sm text-destructive shadow-lg"
                        }
                        ToastVariant::Success => {
                            "flex items-center justify-between rounded-lg border bg-card p-4 text-sm shadow-lg"
                        }
                    },
                    span { "{toast.message}" }
                    button {
                        class: "ml-2 text-muted-foreground hover:text-foreground",
                        onclick: move |_| dismiss(toast.id),
                        XIcon { class: "h-4 w-4".to_string() }
                    }
                }
            }
        }
    }
}
