//! Hero video block decoration.
//!
//! `decorate` turns a host block holding authored rows into a hero: a
//! content wrapper with an optional heading and an always-present player
//! container. The embed itself is loaded later, when the block first
//! becomes visible.

mod content;

pub use content::{AuthoredContent, AuthoredFields, Row};

use hero_video_common::EmbedKind;
use hero_video_embed::{Element, ReadyEvent};
use serde::Serialize;

use crate::config::BlockConfig;
use crate::loader::{EmbedReady, EmbedState, LoadOutcome, PlayerContainer};
use crate::visibility::{IntersectionEntry, MotionPreference, VisibilityTrigger};

/// A block as handed over by the host framework, before decoration.
#[derive(Debug, Clone, Default)]
pub struct Block {
    classes: Vec<String>,
    content: AuthoredContent,
}

impl Block {
    pub fn new(content: AuthoredContent) -> Self {
        Self {
            classes: Vec::new(),
            content,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}

/// A decorated hero video block.
#[derive(Debug)]
pub struct HeroBlock {
    classes: Vec<String>,
    content_class: String,
    heading_level: u8,
    title: Option<String>,
    video_link: Option<String>,
    player: PlayerContainer,
    trigger: Option<VisibilityTrigger>,
}

/// Machine-readable view of a hero block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockSummary {
    pub classes: Vec<String>,
    pub title: Option<String>,
    pub video_link: Option<String>,
    pub observed: bool,
    pub embed_kind: Option<EmbedKind>,
    pub state: EmbedState,
    pub html: String,
}

/// Decorate a host block.
///
/// Consumes the block, dropping its authored rows, and only creates a
/// visibility trigger when a video link was authored. Without one the player
/// container stays empty for good. Heading levels outside 1..=6 are clamped.
pub fn decorate(block: Block, config: &BlockConfig) -> HeroBlock {
    let AuthoredFields { title, video } = block.content.fields();

    let heading_level = config.heading_level.clamp(1, 6);
    if heading_level != config.heading_level {
        tracing::warn!(
            requested = config.heading_level,
            heading_level,
            "Heading level out of range, clamped"
        );
    }

    let mut classes = block.classes;
    if !classes.iter().any(|c| c == &config.marker_class) {
        classes.push(config.marker_class.clone());
    }

    let trigger = video.as_deref().map(VisibilityTrigger::observe);
    tracing::info!(
        title = title.as_deref().unwrap_or_default(),
        video = video.as_deref().unwrap_or_default(),
        observed = trigger.is_some(),
        "Decorated hero video block"
    );

    HeroBlock {
        classes,
        content_class: config.content_class.clone(),
        heading_level,
        title,
        video_link: video,
        player: PlayerContainer::new(config.player_class.as_str()),
        trigger,
    }
}

impl HeroBlock {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn video_link(&self) -> Option<&str> {
        self.video_link.as_deref()
    }

    pub fn player(&self) -> &PlayerContainer {
        &self.player
    }

    pub fn trigger(&self) -> Option<&VisibilityTrigger> {
        self.trigger.as_ref()
    }

    /// Whether a visibility trigger is still waiting for the block to show.
    pub fn is_observed(&self) -> bool {
        self.trigger
            .as_ref()
            .is_some_and(VisibilityTrigger::is_observing)
    }

    /// Forward an intersection observer callback.
    pub fn on_intersection<M>(
        &mut self,
        entries: &[IntersectionEntry],
        motion: &M,
    ) -> Option<LoadOutcome>
    where
        M: MotionPreference + ?Sized,
    {
        let trigger = self.trigger.as_mut()?;
        trigger.on_intersection(entries, motion, &mut self.player)
    }

    /// Forward a media event to the player container.
    pub fn dispatch(&mut self, event: ReadyEvent) -> bool {
        self.player.dispatch(event)
    }

    pub fn ready(&self) -> EmbedReady {
        self.player.ready()
    }

    pub fn to_element(&self) -> Element {
        let mut root = Element::new("div");
        for class in &self.classes {
            root.add_class(class);
        }

        let mut content = Element::new("div");
        content.add_class(&self.content_class);
        if let Some(title) = &self.title {
            let heading = format!("h{}", self.heading_level);
            content.append(Element::new(heading).with_text(title.as_str()));
        }
        content.append(self.player.to_element());

        root.with_child(content)
    }

    pub fn to_html(&self) -> String {
        self.to_element().to_html()
    }

    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            classes: self.classes.clone(),
            title: self.title.clone(),
            video_link: self.video_link.clone(),
            observed: self.is_observed(),
            embed_kind: self.player.embed_kind(),
            state: self.player.state(),
            html: self.to_html(),
        }
    }
}
