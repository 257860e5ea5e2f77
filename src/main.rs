mod cli;

use hero_video::{
    block::{self, AuthoredContent, Block},
    config,
    visibility::{FixedMotionPreference, IntersectionEntry},
};
use hero_video_common::EmbedOptions;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::time::Duration;

struct DecorateArgs {
    classes: Vec<String>,
    visible: bool,
    ready: bool,
    reduced_motion: bool,
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hero_video=trace,hero_video_embed=debug".to_string()
        } else {
            "hero_video=info,hero_video_embed=info".to_string()
        }
    });

    // Markup goes to stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Decorate {
            input,
            classes,
            visible,
            ready,
            reduced_motion,
            json,
        } => decorate_file(
            &input,
            cli.config.as_deref(),
            DecorateArgs {
                classes,
                visible,
                ready,
                reduced_motion,
                json,
            },
        ),
        Commands::Classify { url } => {
            println!("{}", hero_video_embed::classify(&url).kind());
            Ok(())
        }
        Commands::Embed {
            url,
            autoplay,
            background,
        } => {
            let options = EmbedOptions::new(autoplay, background);
            let embed = hero_video_embed::classify(&url).build(options);
            println!("{}", embed.to_html());
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("hero-video {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn decorate_file(input: &Path, config_path: Option<&Path>, args: DecorateArgs) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("File does not exist: {:?}", input);
    }

    let config = config::load_config_or_default(config_path)?;
    let content = AuthoredContent::load(input)
        .with_context(|| format!("Failed to read content file: {:?}", input))?;

    let mut host = Block::new(content);
    for class in args.classes {
        host = host.with_class(class);
    }
    let mut hero = block::decorate(host, &config.block);

    if args.visible {
        let reduced = args.reduced_motion || config.motion.prefers_reduced_motion;
        let motion = FixedMotionPreference(reduced);
        match hero.on_intersection(&[IntersectionEntry::visible(1.0)], &motion) {
            Some(outcome) => tracing::debug!(?outcome, "Simulated intersection"),
            None => tracing::warn!("No video link authored, nothing to load"),
        }
    }

    if args.ready {
        if let Some(event) = hero.player().ready_event() {
            hero.dispatch(event);

            let waiter = hero.ready();
            let timeout = Duration::from_millis(config.cli.ready_timeout_ms);
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            rt.block_on(async { tokio::time::timeout(timeout, waiter.wait()).await })
                .with_context(|| format!("Embed did not become ready within {:?}", timeout))??;
        }
    }

    if args.json {
        let json_str = serde_json::to_string_pretty(&hero.summary())?;
        println!("{}", json_str);
    } else {
        println!("{}", hero.to_html());
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Marker class: {}", config.block.marker_class);
            println!("  Content class: {}", config.block.content_class);
            println!("  Player class: {}", config.block.player_class);
            println!("  Heading level: h{}", config.block.heading_level);
            println!("  Reduced motion: {}", config.motion.prefers_reduced_motion);
            println!("  Ready timeout: {}ms", config.cli.ready_timeout_ms);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Marker class: {}", config.block.marker_class);
            println!("  Heading level: h{}", config.block.heading_level);
        }
    }

    Ok(())
}
