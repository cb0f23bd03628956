use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub disabled: Option<bool>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let disabled = props.disabled.unwrap_or(false);

    let base = "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none";

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90 px-4 py-2",
        ButtonVariant::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground px-4 py-2",
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground px-2 py-1",
    };

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {} {}", base, variant_class, extra),
        _ => format!("{} {}", base, variant_class),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled,
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
