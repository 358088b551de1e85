pub mod assets;
pub mod presence;

pub use assets::{HttpMapAssets, MapAssetService};
pub use presence::PresenceService;
