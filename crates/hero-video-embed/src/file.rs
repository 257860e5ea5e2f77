//! Native `<video>` embeds for direct media files.

use hero_video_common::paths::mime_type_for;
use hero_video_common::{EmbedKind, EmbedOptions};

use crate::builder::{DeferredPlayback, Embed, EmbedBuilder, ReadyEvent};
use crate::fragment::Element;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileBuilder;

impl EmbedBuilder for FileBuilder {
    fn kind(&self) -> EmbedKind {
        EmbedKind::GenericFile
    }

    fn build(&self, link: &str, options: EmbedOptions) -> Embed {
        let mut video = Element::new("video");
        if options.show_controls() {
            video.set_attr("controls", "");
        }
        if options.autoplay {
            video.set_attr("autoplay", "");
        }

        let mut deferred = None;
        if options.background {
            video.set_attr("loop", "");
            video.set_attr("playsinline", "");
            deferred = Some(DeferredPlayback {
                mute: options.muted(),
                play: options.autoplay,
            });
        }

        let source = Element::new("source")
            .with_attr("src", link)
            .with_attr("type", mime_type_for(link));
        video.append(source);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            link,
            background = options.background,
            "Built native video embed"
        );

        Embed {
            kind: EmbedKind::GenericFile,
            root: video,
            ready_on: ReadyEvent::CanPlay,
            deferred,
        }
    }
}
