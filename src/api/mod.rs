//! # API Module
//!
//! HTTP handlers for the playlistmover service, built on the
//! [Axum](https://docs.rs/axum) web framework.
//!
//! ## Endpoints
//!
//! - [`get_playlists`] - `GET /playlists` - lists the caller's playlists on
//!   the requested platform after completing the authorization-code exchange
//! - [`post_playlists`] - `POST /playlists` - creates playlists from a
//!   validated payload (platform write is a documented stub)
//! - [`get_auth`] - `GET /auth` - returns the platform's consent-screen URL
//! - [`health`] - `GET /health` - application status for monitoring
//!
//! ## Request handling
//!
//! Every handler follows the same sequence: validate field presence with
//! [`crate::validator`], resolve a platform client, delegate, and wrap the
//! result in the `{"success": true, ...}` envelope. Failures return early as
//! [`crate::error::ApiError`], which renders the matching error envelope and
//! status code.

mod auth;
mod health;
mod playlists;

pub use auth::get_auth;
pub use health::health;
pub use playlists::{get_playlists, post_playlists};
