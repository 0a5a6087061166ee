//! Playlistmover Service Library
//!
//! This library implements a small HTTP service that retrieves and creates
//! music playlists on third-party streaming platforms through a uniform
//! internal API. Spotify is the only platform with a working client; Apple
//! Music and YouTube Music are recognized identifiers that fail resolution.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the playlist and authorization endpoints
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP response mapping
//! - `platform` - Supported platform identifiers
//! - `server` - HTTP server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `validator` - Request field-presence validation

pub mod api;
pub mod config;
pub mod error;
pub mod platform;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod validator;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues and for surfacing unhandled request failures
/// to the operator without terminating the process.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup errors (missing configuration, unusable
/// listen address) where recovery is not possible.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
