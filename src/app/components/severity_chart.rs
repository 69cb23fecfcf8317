use crate::domain::models::SeverityKey;
use crate::shared::state::use_app_store;
use dioxus::prelude::*;

/// Vulnerability count per severity, read from the store.
#[component]
pub fn SeverityBarChart() -> Element {
    let store = use_app_store();
    let (counts, snapshots) = {
        let severity = store.severity.read();
        (severity.counts, severity.history.len())
    };
    let total = counts.total();
    let bars: Vec<(SeverityKey, u32, String)> = SeverityKey::ALL
        .iter()
        .map(|key| (*key, counts.get(*key), format!("{:.1}%", counts.percent_of_max(*key))))
        .collect();

    rsx! {
        figure { class: "c-severity-chart", aria_label: "Vulnerability distribution",
            div { class: "c-severity-chart__bars",
                for (key, count, height) in bars {
                    div { key: "{key.label()}", class: "c-severity-chart__column",
                        span { class: "c-severity-chart__value", "{count}" }
                        div { class: "c-severity-chart__track",
                            div {
                                class: "c-severity-chart__bar c-severity-chart__bar--{key.css_modifier()}",
                                style: "height: {height};",
                            }
                        }
                        span { class: "c-severity-chart__label", "{key.label()}" }
                    }
                }
            }
            figcaption { class: "c-severity-chart__caption",
                "{total} vulnerabilities"
                if snapshots > 0 {
                    span { " · {snapshots} snapshot(s) recorded" }
                }
            }
        }
    }
}
