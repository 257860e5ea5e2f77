//! # hero-video-embed
//!
//! Video source classification and embed builders.
//!
//! A link is classified as YouTube, Vimeo or a direct media file, then handed
//! to the matching builder, which produces an element tree ready to be
//! appended to a page. Builders never fail and never perform network I/O; the
//! browser fetches the final `src` once the fragment is attached.
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//! - `wasm` - Expose `embed_html` and `classify` through wasm-bindgen
//!
//! ## Example
//!
//! ```
//! use hero_video_common::EmbedOptions;
//! use hero_video_embed::classify;
//!
//! let embed = classify("https://vimeo.com/12345").build(EmbedOptions::new(true, false));
//! assert_eq!(
//!     embed.src(),
//!     Some("https://player.vimeo.com/video/12345?autoplay=1&background=0")
//! );
//! ```

pub mod builder;
pub mod classifier;
pub mod file;
pub mod fragment;
pub mod query;
pub mod vimeo;
pub mod youtube;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

// Re-exports
pub use builder::{DeferredPlayback, Embed, EmbedBuilder, ReadyEvent};
pub use classifier::{classify, EmbedSource};
pub use file::FileBuilder;
pub use fragment::{Element, Node};
pub use vimeo::VimeoBuilder;
pub use youtube::YoutubeBuilder;
