use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Pill,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
            ButtonVariant::Ghost => "c-button--ghost",
            ButtonVariant::Pill => "c-button--pill c-button--primary",
        }
    }
}

/// Styled button. While `busy`, it is disabled and shows `busy_label`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] submit: bool,
    #[props(default)] busy: bool,
    busy_label: Option<String>,
    title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let kind = if submit { "submit" } else { "button" };
    let modifier = variant.modifier();
    let busy_text = if busy { busy_label } else { None };

    rsx! {
        button {
            r#type: kind,
            class: "c-button {modifier}",
            title,
            disabled: disabled || busy,
            aria_busy: busy,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if let Some(text) = busy_text {
                "{text}"
            } else {
                {children}
            }
        }
    }
}
