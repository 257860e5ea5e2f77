//! Lazy embed loading into a player container.
//!
//! A container moves through `NotLoaded -> Loading -> Loaded` and never back.
//! The loader builds at most one embed per container: any call made while an
//! embed is in flight or already ready is a no-op. The transition to `Loaded`
//! happens only when the host reports the embed's ready event, and is
//! published on a watch channel so callers can await it.

use hero_video_common::{EmbedKind, EmbedOptions, Error, Result};
use hero_video_embed::{classify, DeferredPlayback, Element, Embed, ReadyEvent};
use serde::Serialize;
use tokio::sync::watch;

/// Attribute exposing the load state to styling and scripts.
pub const EMBED_LOADED_ATTR: &str = "data-embed-loaded";

/// Load state of a player container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedState {
    #[default]
    NotLoaded,
    /// Fragment attached, waiting for the ready event.
    Loading,
    Loaded,
}

/// Result of a [`load_embed`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A fragment was built and attached.
    Started {
        kind: EmbedKind,
        src: Option<String>,
    },
    /// An earlier call attached a fragment that is not ready yet.
    InProgress,
    AlreadyLoaded,
}

/// Playback changes applied through deferred actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Playback {
    pub muted: bool,
    pub playing: bool,
}

#[derive(Debug, Clone, Copy)]
struct ActiveEmbed {
    kind: EmbedKind,
    ready_on: ReadyEvent,
    deferred: Option<DeferredPlayback>,
}

/// The element that receives the embed fragment.
#[derive(Debug)]
pub struct PlayerContainer {
    class: String,
    children: Vec<Element>,
    active: Option<ActiveEmbed>,
    playback: Playback,
    state: watch::Sender<EmbedState>,
}

impl PlayerContainer {
    pub fn new(class: impl Into<String>) -> Self {
        let (state, _) = watch::channel(EmbedState::NotLoaded);
        Self {
            class: class.into(),
            children: Vec::new(),
            active: None,
            playback: Playback::default(),
            state,
        }
    }

    pub fn state(&self) -> EmbedState {
        *self.state.borrow()
    }

    pub fn is_loaded(&self) -> bool {
        self.state() == EmbedState::Loaded
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Kind of the attached embed, if any.
    pub fn embed_kind(&self) -> Option<EmbedKind> {
        self.active.map(|a| a.kind)
    }

    /// Event the attached embed is waiting for.
    pub fn ready_event(&self) -> Option<ReadyEvent> {
        self.active.map(|a| a.ready_on)
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// A future-like handle that resolves once the embed is ready.
    pub fn ready(&self) -> EmbedReady {
        EmbedReady {
            rx: self.state.subscribe(),
        }
    }

    /// Deliver a host media event to the attached embed.
    ///
    /// Returns `true` when this event moved the container to `Loaded`.
    pub fn dispatch(&mut self, event: ReadyEvent) -> bool {
        let Some(active) = self.active else {
            tracing::debug!(%event, "Media event on empty player container ignored");
            return false;
        };
        if event != active.ready_on {
            return false;
        }

        // Deferred actions run on every matching event, not just the first.
        if let Some(deferred) = active.deferred {
            self.playback.muted |= deferred.mute;
            self.playback.playing |= deferred.play;
        }

        if self.state() != EmbedState::Loading {
            return false;
        }
        self.state.send_replace(EmbedState::Loaded);
        tracing::info!(kind = %active.kind, %event, "Embed ready");
        true
    }

    fn attach(&mut self, embed: Embed) -> LoadOutcome {
        let src = embed.src().map(str::to_string);
        let active = ActiveEmbed {
            kind: embed.kind,
            ready_on: embed.ready_on,
            deferred: embed.deferred,
        };

        self.children.push(embed.root);
        self.active = Some(active);
        // Only after the fragment is in the tree.
        self.state.send_replace(EmbedState::Loading);

        LoadOutcome::Started {
            kind: active.kind,
            src,
        }
    }

    /// Render the container and whatever it holds.
    pub fn to_element(&self) -> Element {
        let mut el = Element::new("div")
            .with_attr("class", self.class.as_str())
            .with_attr(EMBED_LOADED_ATTR, self.is_loaded().to_string());
        for child in &self.children {
            el.append(child.clone());
        }
        el
    }
}

/// Resolves once a player container reaches `Loaded`.
#[derive(Debug)]
pub struct EmbedReady {
    rx: watch::Receiver<EmbedState>,
}

impl EmbedReady {
    /// Whether the embed is ready right now.
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow() == EmbedState::Loaded
    }

    /// Wait for the embed to become ready.
    ///
    /// There is no timeout; a ready event that never fires leaves this pending.
    /// Fails only if the container is dropped first.
    pub async fn wait(mut self) -> Result<()> {
        self.rx
            .wait_for(|state| *state == EmbedState::Loaded)
            .await
            .map(|_| ())
            .map_err(|_| Error::ReadyClosed)
    }
}

/// Classify `link`, build its embed and attach it to `container`.
///
/// Does nothing unless the container is still `NotLoaded`.
pub fn load_embed(
    container: &mut PlayerContainer,
    link: &str,
    options: EmbedOptions,
) -> LoadOutcome {
    match container.state() {
        EmbedState::Loading => {
            tracing::debug!(link, "Embed already loading, skipping");
            return LoadOutcome::InProgress;
        }
        EmbedState::Loaded => {
            tracing::debug!(link, "Embed already loaded, skipping");
            return LoadOutcome::AlreadyLoaded;
        }
        EmbedState::NotLoaded => {}
    }

    let embed = classify(link).build(options);
    let outcome = container.attach(embed);
    tracing::info!(
        link,
        autoplay = options.autoplay,
        background = options.background,
        ?outcome,
        "Embed attached"
    );
    outcome
}
