use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::icons::{Check, X};
use crate::models::PriceModel;

#[component]
pub fn Membership() -> Element {
    let tiers = use_hook(crate::data::pricing_tiers);
    let mut annual = use_signal(|| true);

    rsx! {
        div { class: "view membership-view",
            SectionTitle {
                kicker: "Launch Special · 50% OFF",
                title: "Choose your growth path",
            }
            p { class: "section-subtitle", "Flexible pricing that scales with your ambition" }

            div { class: "billing-toggle",
                button {
                    class: "toggle-option",
                    class: if annual() { "selected" },
                    onclick: move |_| annual.set(true),
                    "Annual"
                    span { class: "save-pill", "Save 50%" }
                }
                button {
                    class: "toggle-option",
                    class: if !annual() { "selected" },
                    onclick: move |_| annual.set(false),
                    "Monthly"
                }
            }

            div { class: "pricing-grid",
                for tier in tiers.iter() {
                    {
                        let price_line = match tier.price {
                            PriceModel::Free => "Free forever".to_string(),
                            PriceModel::Paid { monthly, annual: yearly, annual_original } => {
                                if annual() {
                                    format!("${}/year (was ${})", yearly, annual_original)
                                } else {
                                    format!("${}/month", monthly)
                                }
                            }
                            PriceModel::Custom => "Custom pricing".to_string(),
                        };
                        rsx! {
                            div {
                                key: "{tier.id}",
                                class: "pricing-card",
                                class: if tier.featured { "featured" },
                                if tier.featured {
                                    span { class: "featured-label", "Most Popular" }
                                }
                                h3 { "{tier.name}" }
                                p { class: "tier-tagline", "{tier.tagline}" }
                                div { class: "tier-price", "{price_line}" }
                                ul { class: "tier-features",
                                    for feature in tier.features.iter() {
                                        li {
                                            key: "{feature.text}",
                                            class: if feature.included { "included" } else { "excluded" },
                                            if feature.included {
                                                Check { size: 14 }
                                            } else {
                                                X { size: 14 }
                                            }
                                            span { "{feature.text}" }
                                        }
                                    }
                                }
                                button { class: "tier-cta", "{tier.cta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
