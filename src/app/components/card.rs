use dioxus::prelude::*;

/// Titled panel. `footer` renders below the body, separated by a rule.
#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    #[props(default)] featured: bool,
    class: Option<String>,
    footer: Option<Element>,
    children: Element,
) -> Element {
    let mut classes = vec!["c-card".to_string()];
    if featured {
        classes.push("c-card--featured".to_string());
    }
    classes.extend(class);
    let classes = classes.join(" ");
    let region_label = title.clone();

    rsx! {
        section { class: "{classes}", aria_label: region_label,
            if title.is_some() || subtitle.is_some() {
                header { class: "c-card__header",
                    if let Some(title) = title {
                        h3 { class: "c-card__title", "{title}" }
                    }
                    if let Some(subtitle) = subtitle {
                        span { class: "c-card__subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "c-card__body", {children} }
            if let Some(actions) = footer {
                footer { class: "c-card__footer", {actions} }
            }
        }
    }
}
