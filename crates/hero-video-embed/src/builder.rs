//! The builder interface shared by every embed kind.

use std::fmt;

use hero_video_common::{EmbedKind, EmbedOptions};

use crate::fragment::Element;

/// Outer wrapper style: a 16:9 box via the padding-bottom technique.
pub(crate) const WRAPPER_STYLE: &str =
    "left: 0; width: 100%; height: 0; position: relative; padding-bottom: 56.25%;";

/// Iframe style: fill the wrapper.
pub(crate) const IFRAME_STYLE: &str =
    "border: 0; top: 0; left: 0; width: 100%; height: 100%; position: absolute;";

/// Host event that marks an embed as ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadyEvent {
    /// The iframe finished loading.
    Load,
    /// The media element has enough data to start playing.
    CanPlay,
}

impl fmt::Display for ReadyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::CanPlay => write!(f, "canplay"),
        }
    }
}

/// Playback changes a native video applies once it can play.
///
/// Engines may ignore muting before the element is ready, so background
/// video mutes (and optionally starts) on `canplay` instead of up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredPlayback {
    pub mute: bool,
    pub play: bool,
}

/// A renderable embed produced by a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub kind: EmbedKind,
    /// Fragment root to append into the player container.
    pub root: Element,
    /// Event the loader waits for before marking the container loaded.
    pub ready_on: ReadyEvent,
    pub deferred: Option<DeferredPlayback>,
}

impl Embed {
    /// The URL the browser will fetch once the fragment is attached.
    pub fn src(&self) -> Option<&str> {
        let target = match self.kind {
            EmbedKind::Youtube | EmbedKind::Vimeo => self.root.find("iframe"),
            EmbedKind::GenericFile => self.root.find("source"),
        };
        target.and_then(|el| el.attr("src"))
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

/// Builds an embed fragment from a link and playback options.
///
/// Builders are pure: they never fail and never touch the network. A link
/// they cannot make sense of still yields a (possibly broken) fragment.
pub trait EmbedBuilder: Send + Sync {
    fn kind(&self) -> EmbedKind;

    fn build(&self, link: &str, options: EmbedOptions) -> Embed;
}

/// Wrap an iframe in the fixed aspect-ratio container.
pub(crate) fn responsive_wrapper(iframe: Element) -> Element {
    Element::new("div")
        .with_attr("style", WRAPPER_STYLE)
        .with_child(iframe)
}
