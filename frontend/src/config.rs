//! Application configuration.
//!
//! Compile-time settings for the template frontend. Nothing here is read
//! from the environment; a fork changes these constants directly.

/// Application name.
///
/// Used as the document title.
pub const APP_NAME: &str = "Template";

/// Browser console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
