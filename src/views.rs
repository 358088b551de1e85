pub mod community;
pub mod home;
pub mod membership;
pub mod support;

pub use community::Community;
pub use home::Home;
pub use membership::Membership;
pub use support::Support;
