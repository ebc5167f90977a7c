//! CLI command implementations

pub mod check;
pub mod customize;
pub mod init;
pub mod rules;
