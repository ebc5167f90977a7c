// Core modules
pub mod atomic;
pub mod config;
pub mod error;
pub mod template;

// Re-export commonly used types
pub use config::{Bootstrap, ConfigStore, EventConfig, SocialPlatform};
pub use error::{ErrorKind, EventpageError, Result};
pub use template::{AnchorSet, Outcome, SubstitutionReport, TemplateSubstitutor};
