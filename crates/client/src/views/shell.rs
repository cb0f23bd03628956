//! Shared page chrome wrapped around every route.

use dioxus::prelude::*;

use crate::components::{Header, Toaster};
use crate::Route;

#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-background text-foreground",
            Header {}
            main { class: "mx-auto max-w-5xl space-y-6 px-4 py-6",
                Outlet::<Route> {}
            }
            Toaster {}
        }
    }
}
