use crate::app::components::icons::{InfoIcon, ShieldIcon};
use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::{
    AssetType, Bandwidth, FormErrors, FormField, LaunchMode, ScanForm, TargetMode,
};
use crate::shared::state::use_app_store;
use dioxus::prelude::*;

/// Apply a change to the form and clear the error of the edited field.
fn edit(
    mut form: Signal<ScanForm>,
    mut errors: Signal<FormErrors>,
    field: Option<FormField>,
    apply: impl FnOnce(&mut ScanForm),
) {
    apply(&mut form.write());
    if let Some(field) = field {
        errors.write().remove(&field);
    }
}

#[component]
fn Required() -> Element {
    rsx! { span { class: "req", "aria-hidden": "true", "*" } }
}

/// Scan settings form with a live summary.
#[component]
pub fn NewScan() -> Element {
    let store = use_app_store();
    let mut form = use_signal(ScanForm::default);
    let mut errors = use_signal(FormErrors::new);
    let mut notice = use_signal(|| None::<String>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.read().submit();
        match result {
            Ok(request) => {
                errors.set(FormErrors::new());
                tracing::info!(
                    title = %request.title,
                    launch = ?request.launch,
                    targets = ?request.targets,
                    "Scan form submitted"
                );
                let message = match request.launch {
                    LaunchMode::Now => {
                        store.start_new_scan(request.title.clone());
                        format!("Scan \"{}\" started.", request.title)
                    }
                    LaunchMode::Later => "Scan scheduled successfully.".to_string(),
                };
                notice.set(Some(message));
            }
            Err(found) => {
                errors.set(found);
                notice.set(None);
            }
        }
    };
    let oncancel = move |_: MouseEvent| {
        form.set(ScanForm::default());
        errors.set(FormErrors::new());
        notice.set(None);
    };

    let current = form();
    let errs = errors();
    let title_error = errs.get(&FormField::Title).copied();
    let targets_error = errs.get(&FormField::Targets).copied();
    let schedule_error = errs.get(&FormField::ScheduleAt).copied();
    let select_targets = current.target_mode == TargetMode::Select;
    let launch_later = current.launch == LaunchMode::Later;
    let summary_targets = current.target_summary();
    let summary_launch = current.launch_summary();

    rsx! {
        div { class: "scan-page",
            div { class: "scan-grid",
                form { class: "scan-card", novalidate: true, onsubmit,
                    header { class: "scan-head",
                        div { class: "scan-icon", "aria-hidden": "true", ShieldIcon { size: 28 } }
                        div {
                            h1 { class: "scan-title", "Scan Settings" }
                            p { class: "scan-sub", "Configure bandwidth, targets, and launch behavior" }
                        }
                    }

                    if let Some(message) = notice() {
                        div { class: "scan-notice", role: "status", "{message}" }
                    }

                    div { class: "scan-body",
                        div { class: "row",
                            label { r#for: "title", class: "lbl", "Title ", Required {} }
                            div { class: "fld",
                                input {
                                    id: "title",
                                    class: if title_error.is_some() { "inp err" } else { "inp" },
                                    placeholder: "Enter a descriptive scan title",
                                    value: "{current.title}",
                                    oninput: move |evt: FormEvent| {
                                        edit(form, errors, Some(FormField::Title), |f| f.title = evt.value())
                                    },
                                }
                                if let Some(message) = title_error {
                                    div { id: "err-title", class: "err-msg", "{message}" }
                                }
                            }
                        }

                        div { class: "row",
                            label { class: "lbl", "Bandwidth ", Required {} }
                            div { class: "fld fld-inline",
                                select {
                                    class: "select",
                                    onchange: move |evt: FormEvent| {
                                        let bandwidth = Bandwidth::from_label(&evt.value());
                                        edit(form, errors, None, |f| f.bandwidth = bandwidth)
                                    },
                                    for choice in Bandwidth::ALL {
                                        option {
                                            key: "{choice.label()}",
                                            value: "{choice.label()}",
                                            selected: choice == current.bandwidth,
                                            "{choice.label()}"
                                        }
                                    }
                                }
                                span {
                                    class: "info",
                                    title: "Controls scan aggressiveness. High = faster scans, potentially more network load.",
                                    InfoIcon { size: 16 }
                                }
                            }
                        }

                        div { class: "row",
                            label { class: "lbl", "Asset Type ", Required {} }
                            div { class: "fld radios",
                                for asset in [AssetType::Ip, AssetType::Dns] {
                                    label { key: "{asset.label()}", class: "radio",
                                        input {
                                            r#type: "radio",
                                            name: "asset",
                                            checked: current.asset_type == asset,
                                            onchange: move |_| edit(form, errors, None, |f| f.asset_type = asset),
                                        }
                                        span { "{asset.label()}" }
                                    }
                                }
                            }
                        }

                        section { class: "group",
                            div { class: "group-head",
                                h3 { class: "group-title", "Target IPs / Hosts" }
                                span { class: "muted", "Choose all assets or add a list" }
                            }
                            div { class: "group-body",
                                div { class: "row",
                                    label { class: "lbl", "Target Mode" }
                                    div { class: "fld radios radios-row",
                                        label { class: "radio",
                                            input {
                                                r#type: "radio",
                                                name: "tmode",
                                                checked: !select_targets,
                                                onchange: move |_| edit(form, errors, Some(FormField::Targets), |f| {
                                                    f.target_mode = TargetMode::All
                                                }),
                                            }
                                            span { "All IPs" }
                                        }
                                        label { class: "radio",
                                            input {
                                                r#type: "radio",
                                                name: "tmode",
                                                checked: select_targets,
                                                onchange: move |_| edit(form, errors, None, |f| {
                                                    f.target_mode = TargetMode::Select
                                                }),
                                            }
                                            span { "Select IPs / Hosts" }
                                        }
                                    }
                                }
                                div { class: if select_targets { "row" } else { "row is-disabled" },
                                    label { r#for: "targets", class: "lbl", "List" }
                                    div { class: "fld",
                                        textarea {
                                            id: "targets",
                                            class: if targets_error.is_some() { "ta err" } else { "ta" },
                                            placeholder: "e.g. 10.10.1.10, 10.10.1.11 or host1.example.com (comma, space, or newline separated)",
                                            rows: "6",
                                            disabled: !select_targets,
                                            value: "{current.targets}",
                                            oninput: move |evt: FormEvent| {
                                                edit(form, errors, Some(FormField::Targets), |f| f.targets = evt.value())
                                            },
                                        }
                                        if let Some(message) = targets_error {
                                            div { id: "err-targets", class: "err-msg", "{message}" }
                                        }
                                    }
                                }
                            }
                        }

                        section { class: "group",
                            div { class: "group-head",
                                h3 { class: "group-title", "Launch" }
                                span { class: "muted", "Start now or schedule for a later time" }
                            }
                            div { class: "group-body",
                                div { class: "row",
                                    label { class: "lbl", "Launch Mode ", Required {} }
                                    div { class: "fld radios radios-row",
                                        label { class: "radio",
                                            input {
                                                r#type: "radio",
                                                name: "launch",
                                                checked: !launch_later,
                                                onchange: move |_| edit(form, errors, Some(FormField::ScheduleAt), |f| {
                                                    f.launch = LaunchMode::Now
                                                }),
                                            }
                                            span { "Launch Now" }
                                        }
                                        label { class: "radio",
                                            input {
                                                r#type: "radio",
                                                name: "launch",
                                                checked: launch_later,
                                                onchange: move |_| edit(form, errors, None, |f| f.launch = LaunchMode::Later),
                                            }
                                            span { "Schedule for Later" }
                                        }
                                    }
                                }
                                if launch_later {
                                    div { class: "row",
                                        label { r#for: "scheduleAt", class: "lbl", "Date & Time ", Required {} }
                                        div { class: "fld",
                                            input {
                                                id: "scheduleAt",
                                                r#type: "datetime-local",
                                                class: if schedule_error.is_some() { "inp err" } else { "inp" },
                                                value: "{current.schedule_at}",
                                                oninput: move |evt: FormEvent| {
                                                    edit(form, errors, Some(FormField::ScheduleAt), |f| {
                                                        f.schedule_at = evt.value()
                                                    })
                                                },
                                            }
                                            if let Some(message) = schedule_error {
                                                div { id: "err-schedule", class: "err-msg", "{message}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    footer { class: "scan-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: oncancel, "Cancel" }
                        Button { submit: true, "{current.submit_label()}" }
                    }
                }

                aside { class: "scan-side",
                    div { class: "side-card",
                        h3 { class: "side-title", "Summary" }
                        dl { class: "kv",
                            dt { "Title" }
                            dd {
                                if current.title.is_empty() {
                                    span { class: "muted", "Untitled" }
                                } else {
                                    "{current.title}"
                                }
                            }
                            dt { "Bandwidth" }
                            dd { "{current.bandwidth.label()}" }
                            dt { "Asset Type" }
                            dd { "{current.asset_type.label()}" }
                            dt { "Targets" }
                            dd {
                                if let Some(summary) = summary_targets {
                                    "{summary}"
                                } else {
                                    span { class: "muted", "None" }
                                }
                            }
                            dt { "Launch" }
                            dd { "{summary_launch}" }
                        }
                        div { class: "tip",
                            span { class: "tip-dot", "aria-hidden": "true" }
                            "Scans may take longer with LOW bandwidth on throttled networks."
                        }
                    }
                }
            }
        }
    }
}
