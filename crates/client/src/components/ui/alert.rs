use dioxus::prelude::*;

use crate::components::icons::AlertTriangleIcon;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Default,
    Destructive,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Default
    }
}

/// Inline alert panel with a title, a description, and an optional action
/// slot passed as children.
#[component]
pub fn Alert(
    title: String,
    description: String,
    #[props(optional)] variant: Option<AlertVariant>,
    children: Element,
) -> Element {
    let variant_class = match variant.unwrap_or_default() {
        AlertVariant::Default => "border-border text-foreground",
        AlertVariant::Destructive => "border-destructive/50 text-destructive",
    };

    rsx! {
        div {
            role: "alert",
            class: "relative w-full rounded-lg border p-4 {variant_class}",
            div { class: "flex items-center gap-2",
                AlertTriangleIcon { class: "h-4 w-4".to_string() }
                h5 { class: "font-medium leading-none tracking-tight", "{title}" }
            }
            div { class: "mt-2 text-sm space-y-3",
                p { "{description}" }
                {children}
            }
        }
    }
}
