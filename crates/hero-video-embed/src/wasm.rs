#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Build embed markup from WebAssembly.
///
/// Returns the HTML of the fragment a host page should insert into its
/// player container.
///
/// # Examples (JavaScript)
/// ```javascript
/// import { embed_html } from 'hero-video-embed';
///
/// container.innerHTML = embed_html("https://vimeo.com/12345", true, false);
/// ```
#[wasm_bindgen]
pub fn embed_html(url: &str, autoplay: bool, background: bool) -> String {
    let options = hero_video_common::EmbedOptions::new(autoplay, background);
    crate::classify(url).build(options).to_html()
}

/// Classify a link as `youtube`, `vimeo` or `video`.
#[wasm_bindgen]
pub fn classify(url: &str) -> String {
    crate::classify(url).kind().to_string()
}
