//! YouTube iframe embeds.

use hero_video_common::{flag, EmbedKind, EmbedOptions};
use url::Url;

use crate::builder::{responsive_wrapper, Embed, EmbedBuilder, ReadyEvent, IFRAME_STYLE};
use crate::fragment::Element;
use crate::query::{encode_uri_component, first_path_segment, join_params};

pub const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";

const SHORT_HOST: &str = "youtu.be";

const ALLOW: &str =
    "autoplay; fullscreen; picture-in-picture; encrypted-media; accelerometer; gyroscope";

/// Builds `youtube.com/embed` iframes from watch or short links.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeBuilder;

impl YoutubeBuilder {
    /// Compute the iframe `src` for a link.
    ///
    /// Links without an extractable video id reuse their own path on the
    /// youtube.com origin.
    // FIXME: the path fallback yields a watch page, which YouTube refuses to frame.
    pub fn embed_url(&self, link: &str, options: EmbedOptions) -> String {
        let parsed = match Url::parse(link) {
            Ok(url) => Some(url),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(link, error = %_e, "Unparseable YouTube link, embedding origin");
                None
            }
        };

        let id = parsed.as_ref().map(video_id).unwrap_or_default();
        if id.is_empty() {
            let path = parsed.as_ref().map(|u| u.path()).unwrap_or_default();
            return format!("{}{}", YOUTUBE_ORIGIN, path);
        }

        format!(
            "{}/embed/{id}?rel=0&v={id}{}",
            YOUTUBE_ORIGIN,
            suffix(options)
        )
    }
}

impl EmbedBuilder for YoutubeBuilder {
    fn kind(&self) -> EmbedKind {
        EmbedKind::Youtube
    }

    fn build(&self, link: &str, options: EmbedOptions) -> Embed {
        let src = self.embed_url(link, options);

        #[cfg(feature = "tracing")]
        tracing::debug!(link, src = %src, "Built YouTube embed");

        let iframe = Element::new("iframe")
            .with_attr("src", src)
            .with_attr("style", IFRAME_STYLE)
            .with_attr("allow", ALLOW)
            .with_flag("allowfullscreen")
            .with_attr("scrolling", "no")
            .with_attr("title", "Content from Youtube")
            .with_attr("loading", "lazy");

        Embed {
            kind: EmbedKind::Youtube,
            root: responsive_wrapper(iframe),
            ready_on: ReadyEvent::Load,
            deferred: None,
        }
    }
}

/// Video id from the `v` parameter, or the first path segment on the short host.
fn video_id(url: &Url) -> String {
    if url.host_str().is_some_and(|h| h.contains(SHORT_HOST)) {
        return first_path_segment(url).to_string();
    }
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| encode_uri_component(&value))
        .unwrap_or_default()
}

fn suffix(options: EmbedOptions) -> String {
    if !options.needs_params() {
        return String::new();
    }
    let bg = flag(options.background);
    let params = join_params(&[
        ("autoplay", flag(options.autoplay)),
        ("mute", flag(options.muted())),
        ("controls", flag(options.show_controls())),
        ("disablekb", bg),
        ("loop", bg),
        ("playsinline", bg),
    ]);
    format!("&{}", params)
}
