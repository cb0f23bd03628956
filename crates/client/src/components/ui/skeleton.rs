use dioxus::prelude::*;

/// Full-page placeholder shown while location or weather data is pending.
#[component]
pub fn WeatherSkeleton() -> Element {
    rsx! {
        div { class: "space-y-6",
            div { class: "h-[300px] w-full animate-pulse rounded-lg bg-muted" }
            div { class: "h-[200px] w-full animate-pulse rounded-lg bg-muted" }
            div { class: "grid gap-6 md:grid-cols-2",
                div { class: "h-[300px] animate-pulse rounded-lg bg-muted" }
                div { class: "h-[300px] animate-pulse rounded-lg bg-muted" }
            }
        }
    }
}
