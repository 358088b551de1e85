use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::icons::ChevronDown;

#[component]
pub fn Support() -> Element {
    let entries = use_hook(crate::data::faq_entries);
    let mut expanded = use_signal(|| Option::<usize>::None);

    rsx! {
        div { class: "view support-view",
            SectionTitle {
                kicker: "Support",
                title: "Frequently asked questions",
            }
            div { class: "faq-list",
                for (i, entry) in entries.iter().enumerate() {
                    div {
                        key: "{entry.question}",
                        class: "faq-item",
                        class: if expanded() == Some(i) { "open" },
                        button {
                            class: "faq-question",
                            onclick: move |_| {
                                if expanded() == Some(i) {
                                    expanded.set(None);
                                } else {
                                    expanded.set(Some(i));
                                }
                            },
                            span { class: "faq-category", "{entry.category}" }
                            span { "{entry.question}" }
                            ChevronDown { size: 16 }
                        }
                        if expanded() == Some(i) {
                            p { class: "faq-answer", "{entry.answer}" }
                        }
                    }
                }
            }
        }
    }
}
