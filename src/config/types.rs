use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub block: BlockConfig,

    #[serde(default)]
    pub motion: MotionConfig,

    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BlockConfig {
    /// Class added to the decorated block root
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    /// Class of the wrapper around heading and player
    #[serde(default = "default_content_class")]
    pub content_class: String,

    /// Class of the player container
    #[serde(default = "default_player_class")]
    pub player_class: String,

    /// Heading level used for the title (1-6, default: 1)
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
}

fn default_marker_class() -> String {
    "hero-video".to_string()
}

fn default_content_class() -> String {
    "hero-video-content".to_string()
}

fn default_player_class() -> String {
    "hero-video-player".to_string()
}

fn default_heading_level() -> u8 {
    1
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            marker_class: default_marker_class(),
            content_class: default_content_class(),
            player_class: default_player_class(),
            heading_level: default_heading_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MotionConfig {
    /// Assume the visitor prefers reduced motion (disables autoplay)
    #[serde(default)]
    pub prefers_reduced_motion: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// How long `decorate --ready` waits for the embed (default: 5000)
    #[serde(default = "default_ready_timeout")]
    pub ready_timeout_ms: u64,
}

fn default_ready_timeout() -> u64 {
    5000
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ready_timeout_ms: default_ready_timeout(),
        }
    }
}
