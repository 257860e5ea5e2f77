//! Hero video - lazily loaded hero video blocks
//!
//! This library crate exposes the block decorator, the lazy loader and the
//! visibility trigger for the CLI and for integration testing.

pub mod block;
pub mod config;
pub mod loader;
pub mod visibility;

pub use block::{decorate, AuthoredContent, Block, BlockSummary, HeroBlock};
pub use loader::{load_embed, EmbedReady, EmbedState, LoadOutcome, PlayerContainer};
pub use visibility::{
    FixedMotionPreference, IntersectionEntry, LiveMotionPreference, MotionPreference,
    VisibilityTrigger,
};
