//! Source classification for authored video links.
//!
//! Classification is a substring match on the raw link, checked in order:
//!
//! - **YouTube**: contains `youtube` or `youtu.be`
//! - **Vimeo**: contains `vimeo`
//! - **Generic file**: everything else
//!
//! Links are not validated here. A malformed link is still classified and the
//! matching builder degrades to a best-effort fragment.

use hero_video_common::{EmbedKind, EmbedOptions};

use crate::builder::{Embed, EmbedBuilder};
use crate::file::FileBuilder;
use crate::vimeo::VimeoBuilder;
use crate::youtube::YoutubeBuilder;

static YOUTUBE: YoutubeBuilder = YoutubeBuilder;
static VIMEO: VimeoBuilder = VimeoBuilder;
static FILE: FileBuilder = FileBuilder;

/// A classified video link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmbedSource {
    Youtube(String),
    Vimeo(String),
    GenericFile(String),
}

impl EmbedSource {
    /// Classify a raw link.
    pub fn classify(link: &str) -> Self {
        let owned = link.to_string();
        let source = if is_youtube(link) {
            Self::Youtube(owned)
        } else if link.contains("vimeo") {
            Self::Vimeo(owned)
        } else {
            Self::GenericFile(owned)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(link, kind = %source.kind(), "Classified video link");

        source
    }

    pub fn kind(&self) -> EmbedKind {
        match self {
            Self::Youtube(_) => EmbedKind::Youtube,
            Self::Vimeo(_) => EmbedKind::Vimeo,
            Self::GenericFile(_) => EmbedKind::GenericFile,
        }
    }

    /// The link exactly as authored.
    pub fn link(&self) -> &str {
        match self {
            Self::Youtube(link) | Self::Vimeo(link) | Self::GenericFile(link) => link,
        }
    }

    /// The builder responsible for this kind of source.
    pub fn builder(&self) -> &'static dyn EmbedBuilder {
        match self {
            Self::Youtube(_) => &YOUTUBE,
            Self::Vimeo(_) => &VIMEO,
            Self::GenericFile(_) => &FILE,
        }
    }

    pub fn build(&self, options: EmbedOptions) -> Embed {
        self.builder().build(self.link(), options)
    }
}

/// Classify a raw link.
pub fn classify(link: &str) -> EmbedSource {
    EmbedSource::classify(link)
}

fn is_youtube(link: &str) -> bool {
    link.contains("youtube") || link.contains("youtu.be")
}
