use dioxus::prelude::*;

#[component]
pub fn SectionTitle(kicker: String, title: String) -> Element {
    rsx! {
        div { class: "section-title",
            span { class: "section-kicker", "{kicker}" }
            h2 { "{title}" }
        }
    }
}

#[component]
pub fn StatBadge(value: String, label: String) -> Element {
    rsx! {
        div { class: "stat-badge",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
