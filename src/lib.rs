#![allow(non_snake_case)]

pub mod components;
pub mod data;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod map;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;
pub mod window;

use dioxus::prelude::*;

use layouts::MainLayout;
use state::{AppState, AppStateProvider};
use views::{community::Community, home::Home, membership::Membership, support::Support};
use window::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/community")]
        Community {},
        #[route("/membership")]
        Membership {},
        #[route("/support")]
        Support {},
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::Community {} => "Community",
            Route::Membership {} => "Membership",
            Route::Support {} => "Support",
        }
    }
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        AppStateProvider { AppContent {} }
    }
}

fn AppContent() -> Element {
    let state = use_context::<AppState>();
    let dark_mode = (state.settings)().dark_mode;

    rsx! {
        div { class: if dark_mode { "dark" },
            div {
                class: "app-shell",
                style: "min-height: {WINDOW_HEIGHT}px; width: {WINDOW_WIDTH}px;",
                Router::<Route> {}
            }
        }
    }
}

pub fn run_app() {
    tracing_subscriber::fmt::init();

    LaunchBuilder::new()
        .with_cfg(window::desktop_config())
        .launch(App);
}
