mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./hero-video.toml",
        "~/.config/hero-video/config.toml",
        "/etc/hero-video/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let classes = [
        ("marker_class", &config.block.marker_class),
        ("content_class", &config.block.content_class),
        ("player_class", &config.block.player_class),
    ];
    for (name, class) in classes {
        if class.is_empty() {
            anyhow::bail!("block.{} cannot be empty", name);
        }
        if class.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "block.{} must be a single class name, got {:?}",
                name,
                class
            );
        }
    }

    if config.block.content_class == config.block.player_class {
        tracing::warn!(
            "block.content_class and block.player_class are both {:?}",
            config.block.player_class
        );
    }

    if !(1..=6).contains(&config.block.heading_level) {
        anyhow::bail!(
            "block.heading_level must be between 1 and 6, got {}",
            config.block.heading_level
        );
    }

    if config.cli.ready_timeout_ms == 0 {
        anyhow::bail!("cli.ready_timeout_ms cannot be 0");
    }

    Ok(())
}
