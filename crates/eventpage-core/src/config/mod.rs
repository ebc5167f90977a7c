pub mod consts;
pub mod model;
pub mod store;

pub use model::{EventConfig, SocialPlatform, REQUIRED_FIELDS};
pub use store::{Bootstrap, ConfigStore};
