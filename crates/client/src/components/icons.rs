//! Inline SVG icons (lucide outlines).

use dioxus::prelude::*;

#[component]
pub fn SunIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn MapPinIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn RefreshIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M21 12a9 9 0 1 1-2.64-6.36M21 3v6h-6" }
        }
    }
}

#[component]
pub fn AlertTriangleIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.46 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" }
            path { d: "M12 9v4m0 4h.01" }
        }
    }
}

#[component]
pub fn XIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M18 6 6 18M6 6l12 12" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.35-4.35" }
        }
    }
}

#[component]
pub fn StarIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M11.05 2.93a1 1 0 0 1 1.9 0l1.92 5.37a1 1 0 0 0 .95.67h5.15a1 1 0 0 1 .6 1.8l-4.3 3.2a1 1 0 0 0-.35 1.12l1.7 5.28a1 1 0 0 1-1.54 1.12L12.6 18.3a1 1 0 0 0-1.2 0l-4.48 3.2a1 1 0 0 1-1.54-1.13l1.7-5.27a1 1 0 0 0-.35-1.13l-4.3-3.2a1 1 0 0 1 .6-1.79h5.15a1 1 0 0 0 .95-.67Z" }
        }
    }
}

#[component]
pub fn LoaderIcon(#[props(optional)] class: Option<String>) -> Element {
    rsx! {
        svg {
            class: class.unwrap_or_default(),
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            path { d: "M21 12a9 9 0 1 1-6.22-8.56" }
        }
    }
}
