use crate::app::components::{Button, ButtonVariant};
use crate::app::components::icons::{ChatIcon, DocIcon, PlusIcon, ShieldIcon, TrashIcon};
use crate::domain::models::{IconProps, NAV_ICON_SIZE};
use crate::shared::static_data::SUPPORT_WELCOME;
use dioxus::prelude::*;

struct CommonTask {
    icon: fn(IconProps) -> Element,
    label: &'static str,
    sublabel: Option<&'static str>,
}

static TASKS: [CommonTask; 4] = [
    CommonTask {
        icon: TrashIcon,
        label: "Remove IPs",
        sublabel: None,
    },
    CommonTask {
        icon: PlusIcon,
        label: "Add IPs",
        sublabel: None,
    },
    CommonTask {
        icon: DocIcon,
        label: "Request False Positive Review/ Addendum",
        sublabel: None,
    },
    CommonTask {
        icon: ShieldIcon,
        label: "Generate PCC Compliance",
        sublabel: Some("Executive network report"),
    },
];

#[component]
pub fn ContactSupport() -> Element {
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut subject_error = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let onsubmit = move |_: MouseEvent| {
        if subject.read().trim().is_empty() {
            subject_error.set(true);
            return;
        }
        tracing::info!(subject = %subject.read().trim(), "Support request submitted");
        subject.set(String::new());
        message.set(String::new());
        sent.set(true);
    };
    let oncancel = move |_: MouseEvent| {
        subject.set(String::new());
        message.set(String::new());
        subject_error.set(false);
        sent.set(false);
    };

    rsx! {
        div { class: "cs-page",
            div { class: "cs-card",
                header { class: "cs-header",
                    h1 { class: "cs-title", "Contact Support" }
                    div { class: "cs-hero", "aria-hidden": "true",
                        div { class: "cs-hero-circle", ChatIcon { size: 48 } }
                    }
                }

                section { class: "cs-welcome",
                    h2 { class: "cs-welcome-title", "Welcome!" }
                    p { class: "cs-welcome-desc", "{SUPPORT_WELCOME}" }
                }

                section { class: "cs-tasks",
                    h3 { class: "cs-section-title", "Common Tasks" }
                    div { class: "cs-task-grid",
                        for task in TASKS.iter() {
                            button {
                                key: "{task.label}",
                                r#type: "button",
                                class: if task.sublabel.is_some() { "cs-task cs-task--wide" } else { "cs-task" },
                                aria_label: task.label,
                                onclick: move |_| tracing::info!(task = task.label, "Support task requested"),
                                span { class: "cs-task-icon", {(task.icon)(IconProps { size: NAV_ICON_SIZE })} }
                                span { class: "cs-task-text",
                                    span { class: "cs-task-label", "{task.label}" }
                                    if let Some(sublabel) = task.sublabel {
                                        span { class: "cs-task-sublabel", "{sublabel}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section { class: "cs-form",
                    h3 { class: "cs-section-title", "Email" }
                    if sent() {
                        div { class: "cs-notice", role: "status", "Your request has been sent to support." }
                    }
                    div { class: "cs-form-grid",
                        div { class: "cs-field",
                            label { class: "cs-label", "Product:" }
                            div { class: "cs-static", "Qualysguard PCI" }
                        }
                        div { class: "cs-field",
                            label { class: "cs-label", "To:" }
                            div { class: "cs-static", "Qualysguard PCI Support" }
                        }
                        div { class: "cs-field cs-field--full",
                            label { r#for: "subject", class: "cs-label required", "Subject" }
                            input {
                                id: "subject",
                                class: if subject_error() { "cs-input err" } else { "cs-input" },
                                placeholder: "Add a concise subject",
                                value: "{subject}",
                                oninput: move |evt: FormEvent| {
                                    subject.set(evt.value());
                                    subject_error.set(false);
                                    sent.set(false);
                                },
                            }
                            if subject_error() {
                                div { class: "err-msg", "Subject is required." }
                            }
                        }
                        div { class: "cs-field cs-field--full",
                            label { r#for: "message", class: "cs-label", "Message" }
                            textarea {
                                id: "message",
                                class: "cs-textarea",
                                rows: "6",
                                placeholder: "Describe the issue or request. Include IPs, scan IDs, dates, etc.",
                                value: "{message}",
                                oninput: move |evt: FormEvent| message.set(evt.value()),
                            }
                        }
                        div { class: "cs-actions cs-field--full", role: "group", aria_label: "form actions",
                            Button { variant: ButtonVariant::Ghost, onclick: oncancel, "Cancel" }
                            Button { onclick: onsubmit, "Submit" }
                        }
                    }
                }
            }
        }
    }
}
