//! Integration tests for the decorate -> intersect -> load -> ready flow.

use assert_matches::assert_matches;
use hero_video::config::BlockConfig;
use hero_video::{
    decorate, AuthoredContent, Block, EmbedState, FixedMotionPreference, HeroBlock,
    IntersectionEntry, LiveMotionPreference, LoadOutcome,
};
use hero_video_common::EmbedKind;
use hero_video_embed::ReadyEvent;

fn hero(rows: &[[&str; 2]]) -> HeroBlock {
    let content = AuthoredContent::from_rows(rows.iter().copied());
    decorate(Block::new(content), &BlockConfig::default())
}

/// Report the block as fully in view.
fn scroll_into_view(hero: &mut HeroBlock, reduced_motion: bool) -> Option<LoadOutcome> {
    let entries = [IntersectionEntry::visible(1.0)];
    hero.on_intersection(&entries, &FixedMotionPreference(reduced_motion))
}

fn player_src(hero: &HeroBlock) -> Option<String> {
    let root = hero.player().children().first()?;
    root.find("iframe")
        .or_else(|| root.find("source"))
        .and_then(|el| el.attr("src"))
        .map(str::to_string)
}

#[test]
fn test_skeleton_until_visible() {
    let hero = hero(&[["Title", "Welcome"], ["Video", "https://vimeo.com/1"]]);
    let root = hero.to_element();

    let heading = root.find("h1").map(|h| h.text_content());
    assert_eq!(heading.as_deref(), Some("Welcome"));
    assert!(root.find("h2").is_none());

    let player = root.find("div").and_then(|content| content.find("div"));
    assert_eq!(
        player.and_then(|p| p.attr("data-embed-loaded")),
        Some("false")
    );
    assert!(hero.player().children().is_empty());
}

#[test]
fn test_no_video_never_loads() {
    let mut hero = hero(&[["Title", "Only a title"]]);
    assert!(hero.trigger().is_none());
    assert!(!hero.is_observed());

    assert!(scroll_into_view(&mut hero, false).is_none());
    assert!(hero.player().children().is_empty());
    assert_eq!(hero.player().state(), EmbedState::NotLoaded);
    assert!(hero.to_html().contains("<h1>Only a title</h1>"));
}

#[test]
fn test_nothing_happens_before_visibility() {
    let mut hero = hero(&[["Video", "https://www.youtube.com/watch?v=abc123"]]);
    assert!(hero.is_observed());

    let motion = FixedMotionPreference(false);
    let outcome = hero.on_intersection(&[IntersectionEntry::hidden()], &motion);
    assert!(outcome.is_none());
    assert!(hero.is_observed());
    assert!(hero.player().children().is_empty());
}

#[test]
fn test_youtube_autoplays_without_reduced_motion() {
    let mut hero = hero(&[
        ["Title", "Welcome"],
        ["Video", "https://www.youtube.com/watch?v=abc123"],
    ]);

    let outcome = scroll_into_view(&mut hero, false);
    assert_matches!(
        outcome,
        Some(LoadOutcome::Started {
            kind: EmbedKind::Youtube,
            ..
        })
    );
    assert!(!hero.is_observed());
    assert_eq!(hero.player().state(), EmbedState::Loading);
    assert_eq!(
        player_src(&hero).as_deref(),
        Some(
            "https://www.youtube.com/embed/abc123?rel=0&v=abc123\
             &autoplay=1&mute=0&controls=1&disablekb=0&loop=0&playsinline=0"
        )
    );
}

#[test]
fn test_reduced_motion_drops_autoplay() {
    let mut hero = hero(&[["Video", "https://vimeo.com/76979871"]]);

    scroll_into_view(&mut hero, true);
    assert_eq!(
        player_src(&hero).as_deref(),
        Some("https://player.vimeo.com/video/76979871")
    );
}

#[test]
fn test_motion_preference_read_at_trigger_time() {
    let motion = LiveMotionPreference::new(false);
    let mut hero = hero(&[["Video", "https://vimeo.com/42"]]);

    // Preference changes after decoration but before the block shows.
    motion.set(true);
    hero.on_intersection(&[IntersectionEntry::visible(1.0)], &motion);
    assert_eq!(
        player_src(&hero).as_deref(),
        Some("https://player.vimeo.com/video/42")
    );
}

#[test]
fn test_second_intersection_is_ignored() {
    let mut hero = hero(&[["Video", "https://cdn.example.com/loop.webm"]]);

    assert!(scroll_into_view(&mut hero, false).is_some());
    assert!(scroll_into_view(&mut hero, false).is_none());
    assert_eq!(hero.player().children().len(), 1);
}

#[test]
fn test_loaded_block_builds_one_embed() {
    let mut hero = hero(&[["Video", "https://vimeo.com/5"]]);
    scroll_into_view(&mut hero, false);
    assert!(hero.dispatch(ReadyEvent::Load));

    // Further observer callbacks and media events change nothing.
    assert!(scroll_into_view(&mut hero, true).is_none());
    assert!(!hero.dispatch(ReadyEvent::Load));

    let html = hero.to_html();
    assert_eq!(html.matches("<iframe").count(), 1);
    assert_eq!(html.matches("data-embed-loaded=\"true\"").count(), 1);
    assert_eq!(hero.player().children().len(), 1);
}

#[test]
fn test_ready_event_marks_loaded() {
    let mut hero = hero(&[["Video", "https://cdn.example.com/loop.mp4"]]);
    scroll_into_view(&mut hero, false);

    assert_eq!(hero.player().ready_event(), Some(ReadyEvent::CanPlay));
    assert!(hero.to_html().contains("data-embed-loaded=\"false\""));

    // An iframe event does not concern a native video.
    assert!(!hero.dispatch(ReadyEvent::Load));
    assert_eq!(hero.player().state(), EmbedState::Loading);

    assert!(hero.dispatch(ReadyEvent::CanPlay));
    assert_eq!(hero.player().state(), EmbedState::Loaded);
    assert!(hero.to_html().contains("data-embed-loaded=\"true\""));

    // Loaded is final.
    assert!(!hero.dispatch(ReadyEvent::CanPlay));
    assert_eq!(hero.player().state(), EmbedState::Loaded);
}

#[test]
fn test_summary_reflects_state() {
    let mut hero = hero(&[["Title", "Hi"], ["Video", "https://youtu.be/xyz"]]);
    scroll_into_view(&mut hero, true);
    hero.dispatch(ReadyEvent::Load);

    let summary = hero.summary();
    assert_eq!(summary.title.as_deref(), Some("Hi"));
    assert_eq!(summary.embed_kind, Some(EmbedKind::Youtube));
    assert_eq!(summary.state, EmbedState::Loaded);
    assert!(!summary.observed);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["embed_kind"], "youtube");
    assert_eq!(json["state"], "loaded");
}

#[tokio::test]
async fn test_waiter_resolves_after_ready_event() {
    let mut hero = hero(&[["Video", "https://vimeo.com/9"]]);
    let waiter = hero.ready();
    let handle = tokio::spawn(waiter.wait());

    scroll_into_view(&mut hero, false);
    tokio::task::yield_now().await;
    assert!(!handle.is_finished());

    hero.dispatch(ReadyEvent::Load);
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_waiter_fails_when_block_dropped() {
    let hero = hero(&[["Video", "https://vimeo.com/9"]]);
    let waiter = hero.ready();
    drop(hero);
    assert!(waiter.wait().await.is_err());
}
