//! Viewport-driven triggering of the lazy loader.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hero_video_common::EmbedOptions;

use crate::loader::{load_embed, LoadOutcome, PlayerContainer};

/// Source of the user's reduced-motion preference.
///
/// Queried when the trigger fires, not when the block is decorated, so a
/// change made in between is honoured.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

impl<F: Fn() -> bool> MotionPreference for F {
    fn prefers_reduced_motion(&self) -> bool {
        self()
    }
}

/// A preference that never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedMotionPreference(pub bool);

impl MotionPreference for FixedMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }
}

/// A preference the host can update at any time, e.g. from a media-query
/// change listener.
#[derive(Debug, Clone, Default)]
pub struct LiveMotionPreference {
    reduced: Arc<AtomicBool>,
}

impl LiveMotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self {
            reduced: Arc::new(AtomicBool::new(reduced)),
        }
    }

    pub fn set(&self, reduced: bool) {
        self.reduced.store(reduced, Ordering::Relaxed);
    }
}

impl MotionPreference for LiveMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced.load(Ordering::Relaxed)
    }
}

/// One observation delivered by the host's intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio: ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_intersecting || self.intersection_ratio > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Observing the block.
    Idle,
    /// Fired once and disconnected.
    Triggered,
}

/// Fires the lazy loader the first time its block becomes visible.
#[derive(Debug)]
pub struct VisibilityTrigger {
    link: String,
    state: TriggerState,
}

impl VisibilityTrigger {
    /// Start observing on behalf of `link`.
    pub fn observe(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            state: TriggerState::Idle,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_observing(&self) -> bool {
        self.state == TriggerState::Idle
    }

    /// Stop observing. Does not cancel a load that already started.
    pub fn disconnect(&mut self) {
        self.state = TriggerState::Triggered;
    }

    /// Handle an observer callback.
    ///
    /// On the first callback with a visible entry the trigger disconnects and
    /// loads the embed (never in background mode), autoplaying unless the
    /// user prefers reduced motion. Returns `None` when nothing was triggered.
    pub fn on_intersection<M>(
        &mut self,
        entries: &[IntersectionEntry],
        motion: &M,
        container: &mut PlayerContainer,
    ) -> Option<LoadOutcome>
    where
        M: MotionPreference + ?Sized,
    {
        if !self.is_observing() || !entries.iter().any(IntersectionEntry::is_visible) {
            return None;
        }
        self.disconnect();

        let autoplay = !motion.prefers_reduced_motion();
        tracing::debug!(link = %self.link, autoplay, "Block became visible");

        Some(load_embed(container, &self.link, EmbedOptions::new(autoplay, false)))
    }
}
