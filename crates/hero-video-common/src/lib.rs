//! Hero-Video-Common: Shared types, errors, and utilities.
//!
//! This crate provides common functionality used across hero-video:
//!
//! - **Core Types**: the embed kind tag and the playback options every builder takes
//! - **Path Utilities**: MIME type hints derived from a media link's extension
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use hero_video_common::{EmbedKind, EmbedOptions, Error, Result};
//! use hero_video_common::paths::mime_type_for;
//!
//! let options = EmbedOptions::background();
//! assert!(options.muted());
//!
//! assert_eq!(EmbedKind::Vimeo.to_string(), "vimeo");
//! assert_eq!(mime_type_for("https://cdn.example.com/intro.webm"), "video/webm");
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("empty link"))
//! }
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
