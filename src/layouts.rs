use dioxus::prelude::*;

use crate::hooks::use_app_state;
use crate::icons::{Activity, Globe, Moon};
use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    let app = use_app_state();
    let mut settings = app.settings;
    let route = use_route::<Route>();

    rsx! {
        div { class: "app-frame",
            header { class: "top-nav",
                Link {
                    to: Route::Home {},
                    class: "brand",
                    Globe { size: 22, class: Some("brand-mark".to_string()) }
                    span { class: "brand-name", "IAWD Pulse" }
                }
                nav { class: "nav-links",
                    NavItem { to: Route::Home {}, label: "Home", selected: matches!(route, Route::Home {}) }
                    NavItem { to: Route::Community {}, label: "Community", selected: matches!(route, Route::Community {}) }
                    NavItem { to: Route::Membership {}, label: "Membership", selected: matches!(route, Route::Membership {}) }
                    NavItem { to: Route::Support {}, label: "Support", selected: matches!(route, Route::Support {}) }
                }
                div { class: "nav-actions",
                    button {
                        class: "icon-button",
                        class: if (settings)().reduce_motion { "selected" },
                        title: "Reduce motion",
                        onclick: move |_| {
                            settings.with_mut(|s| s.reduce_motion = !s.reduce_motion);
                        },
                        Activity { size: 16 }
                    }
                    button {
                        class: "icon-button",
                        class: if (settings)().dark_mode { "selected" },
                        title: "Dark mode",
                        onclick: move |_| {
                            settings.with_mut(|s| s.dark_mode = !s.dark_mode);
                        },
                        Moon { size: 16 }
                    }
                }
            }

            main { class: "content", Outlet::<Route> {} }

            footer { class: "site-footer",
                span { "IAWD · Your global developer home base" }
                span { class: "footer-note", "501(c)(3) Nonprofit" }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: String, selected: bool) -> Element {
    let class = if selected {
        "nav-link selected"
    } else {
        "nav-link"
    };
    rsx! {
        Link { to, class: "{class}", "{label}" }
    }
}
