//! Template module - anchor-based literal substitution
//!
//! The page is treated as opaque text. A fixed, ordered table of rules maps
//! literal anchors (default values shipped in the page) to values taken from
//! the event config.
//!
//! ## Philosophy
//!
//! - **No template language**: no placeholder syntax, loops or conditionals
//! - **Anchors are a contract**: see [`anchors::ANCHOR_SET_VERSION`]
//! - **Per-rule outcomes**: `applied | skipped | notFound`, never an error
//! - **Idempotent**: anchors are consumed on the first run

pub mod anchors;
pub mod report;
pub mod rules;
pub mod substitutor;

pub use anchors::{AnchorSet, ANCHOR_SET_VERSION};
pub use report::{Outcome, RuleReport, SkipReason, SubstitutionReport};
pub use rules::{Frame, ReplacementRule, RuleId, RuleTable, ValueSource};
pub use substitutor::TemplateSubstitutor;
