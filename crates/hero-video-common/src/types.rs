//! Core type definitions shared by the embed builders and the loader.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which embed builder handles a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    /// YouTube watch or short links, rendered as an iframe.
    Youtube,
    /// Vimeo links, rendered as an iframe.
    Vimeo,
    /// Anything else, rendered as a native video element.
    #[serde(rename = "video")]
    GenericFile,
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Youtube => write!(f, "youtube"),
            Self::Vimeo => write!(f, "vimeo"),
            Self::GenericFile => write!(f, "video"),
        }
    }
}

/// Playback options handed to every embed builder.
///
/// `background` implies muted, looped, control-less inline playback and is
/// independent of `autoplay`, which only decides whether playback starts
/// immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub background: bool,
}

impl EmbedOptions {
    pub fn new(autoplay: bool, background: bool) -> Self {
        Self {
            autoplay,
            background,
        }
    }

    /// Ambient playback: background mode without autoplay.
    pub fn background() -> Self {
        Self::new(false, true)
    }

    /// Whether the provider needs any playback parameters at all.
    pub fn needs_params(&self) -> bool {
        self.autoplay || self.background
    }

    /// Background playback starts muted.
    pub fn muted(&self) -> bool {
        self.background
    }

    pub fn show_controls(&self) -> bool {
        !self.background
    }
}

/// Render a flag the way embed providers expect it in a query string.
pub fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
