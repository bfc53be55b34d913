//! vetdesk Core - shared configuration and error handling
//!
//! This crate provides the error taxonomy and the configuration layer used by
//! the changelog pipeline and the `vetdesk` CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ChangelogError, ConfigError, Result, VetdeskError};
