pub mod map_panel;
pub mod ui;

pub use map_panel::WorldMapPanel;
pub use ui::*;
