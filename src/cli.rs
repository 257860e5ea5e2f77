use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hero-video")]
#[command(author, version, about = "Render lazily loaded hero video blocks")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decorate a block from an authored content file (JSON or TOML)
    Decorate {
        /// Content file holding the title and video rows
        #[arg(required = true)]
        input: PathBuf,

        /// Extra class carried by the host block
        #[arg(long = "class")]
        classes: Vec<String>,

        /// Simulate the block scrolling into view
        #[arg(long)]
        visible: bool,

        /// Dispatch the ready event and wait for the embed to load
        #[arg(long, requires = "visible")]
        ready: bool,

        /// Act as if the visitor prefers reduced motion
        #[arg(long)]
        reduced_motion: bool,

        /// Output a JSON summary instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Print the kind of embed a link resolves to
    Classify {
        /// Video link
        url: String,
    },

    /// Print the embed markup for a link
    Embed {
        /// Video link
        url: String,

        /// Start playback immediately
        #[arg(long)]
        autoplay: bool,

        /// Muted, looping playback without controls
        #[arg(long)]
        background: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
