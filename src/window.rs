use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

pub const WINDOW_WIDTH: f64 = 1100.0;
pub const WINDOW_HEIGHT: f64 = 760.0;

pub fn desktop_config() -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("IAWD Pulse")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(true),
        )
        .with_menu(None)
}
