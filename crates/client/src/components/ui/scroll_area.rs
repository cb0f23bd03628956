use dioxus::prelude::*;

/// Horizontal scroll container for the favorites strip.
#[component]
pub fn ScrollArea(children: Element) -> Element {
    rsx! {
        div { class: "relative w-full overflow-x-auto pb-3",
            {children}
        }
    }
}
