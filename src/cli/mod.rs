use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "zoroastervers-docs",
    about = "Generates the architecture diagram and technical specification sheet for the Zoroastervers Android reader",
    version,
    author,
    long_about = None
)]
pub struct DocsCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    /// Directory that relative output paths are written under
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the technical specification sheet and save it as JSON
    Specs {
        /// Output file for the specification JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the architecture diagram to PNG and SVG
    Diagram {
        #[command(flatten)]
        args: DiagramArgs,
    },

    /// Lint the diagram and check the specification sheet without writing files
    Check,

    /// Run `specs` and then `diagram`
    All {
        /// Output file for the specification JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        args: DiagramArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct DiagramArgs {
    /// PNG output file
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// SVG output file
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Renderer backend (mmdc, kroki)
    #[arg(short, long)]
    pub renderer: Option<String>,

    /// Also write the Mermaid source to this file
    #[arg(long)]
    pub source: Option<PathBuf>,
}
