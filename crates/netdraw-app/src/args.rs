//! Command-line argument definitions.

use clap::Parser;

/// Replay a NetDraw editing session and report the resulting diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the session script (JSON array of commands)
    #[arg(short, long)]
    pub script: String,

    /// Path to the editor configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to write the rendered SVG to
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
