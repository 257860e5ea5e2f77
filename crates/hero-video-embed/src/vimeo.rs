//! Vimeo iframe embeds.

use hero_video_common::{flag, EmbedKind, EmbedOptions};
use url::Url;

use crate::builder::{responsive_wrapper, Embed, EmbedBuilder, ReadyEvent, IFRAME_STYLE};
use crate::fragment::Element;
use crate::query::{first_path_segment, join_params};

pub const VIMEO_PLAYER: &str = "https://player.vimeo.com/video";

#[derive(Debug, Clone, Copy, Default)]
pub struct VimeoBuilder;

impl VimeoBuilder {
    pub fn embed_url(&self, link: &str, options: EmbedOptions) -> String {
        let id = match Url::parse(link) {
            Ok(url) => first_path_segment(&url).to_string(),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(link, error = %_e, "Unparseable Vimeo link");
                String::new()
            }
        };

        let suffix = if options.needs_params() {
            let params = join_params(&[
                ("autoplay", flag(options.autoplay)),
                ("background", flag(options.background)),
            ]);
            format!("?{}", params)
        } else {
            String::new()
        };

        format!("{}/{}{}", VIMEO_PLAYER, id, suffix)
    }
}

impl EmbedBuilder for VimeoBuilder {
    fn kind(&self) -> EmbedKind {
        EmbedKind::Vimeo
    }

    fn build(&self, link: &str, options: EmbedOptions) -> Embed {
        let src = self.embed_url(link, options);

        #[cfg(feature = "tracing")]
        tracing::debug!(link, src = %src, "Built Vimeo embed");

        let iframe = Element::new("iframe")
            .with_attr("src", src)
            .with_attr("style", IFRAME_STYLE)
            .with_attr("frameborder", "0")
            .with_attr("allow", "autoplay; fullscreen; picture-in-picture")
            .with_flag("allowfullscreen")
            .with_attr("title", "Content from Vimeo")
            .with_attr("loading", "lazy");

        Embed {
            kind: EmbedKind::Vimeo,
            root: responsive_wrapper(iframe),
            ready_on: ReadyEvent::Load,
            deferred: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link() {
        assert_eq!(
            VimeoBuilder.embed_url("https://vimeo.com/12345", EmbedOptions::default()),
            "https://player.vimeo.com/video/12345"
        );
    }

    #[test]
    fn test_autoplay() {
        assert_eq!(
            VimeoBuilder.embed_url("https://vimeo.com/12345", EmbedOptions::new(true, false)),
            "https://player.vimeo.com/video/12345?autoplay=1&background=0"
        );
    }

    #[test]
    fn test_background() {
        assert_eq!(
            VimeoBuilder.embed_url(
                "https://vimeo.com/12345?share=copy",
                EmbedOptions::background()
            ),
            "https://player.vimeo.com/video/12345?autoplay=0&background=1"
        );
    }

    #[test]
    fn test_only_first_segment_is_used() {
        // Channel links carry the id deeper in the path; they embed broken.
        assert_eq!(
            VimeoBuilder.embed_url(
                "https://vimeo.com/channels/staffpicks/999",
                EmbedOptions::default()
            ),
            "https://player.vimeo.com/video/channels"
        );
    }

    #[test]
    fn test_unparseable_link() {
        let embed = VimeoBuilder.build("not a vimeo url", EmbedOptions::default());
        assert_eq!(embed.src(), Some("https://player.vimeo.com/video/"));
    }

    #[test]
    fn test_iframe_markup() {
        let embed = VimeoBuilder.build("https://vimeo.com/1", EmbedOptions::default());
        assert_eq!(embed.ready_on, ReadyEvent::Load);
        let iframe = embed.root.find("iframe").unwrap();
        assert_eq!(iframe.attr("title"), Some("Content from Vimeo"));
        assert_eq!(iframe.attr("frameborder"), Some("0"));
        assert_eq!(iframe.attr("loading"), Some("lazy"));
        assert!(iframe.has_attr("allowfullscreen"));
    }
}
