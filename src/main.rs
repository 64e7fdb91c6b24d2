use anyhow::Result;
use clap::Parser;
use log::{ debug, info };

use zoroastervers_docs::config::DocsConfig;

mod cli;
use cli::commands;
use cli::{ Commands, DiagramArgs, DocsCli };

#[tokio::main]
async fn main() {
    // Parse the command line arguments
    let cli = DocsCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: DocsCli) -> Result<()> {
    let format = commands::parse_output_format(&cli.output_format)?;

    let mut config = DocsConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = Some(dir);
    }
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        Commands::Specs { output } => {
            commands::specs::execute(&config, output.as_deref(), format)?;
        }

        Commands::Diagram { args } => {
            apply_diagram_args(&mut config, &args)?;
            commands::diagram::execute(&config, format).await?;
        }

        Commands::Check => {
            commands::check::execute(format)?;
        }

        Commands::All { output, args } => {
            apply_diagram_args(&mut config, &args)?;
            // In JSON mode stdout carries the spec document, then the diagram paths document
            commands::specs::execute(&config, output.as_deref(), format)?;
            commands::diagram::execute(&config, format).await?;
        }
    }

    Ok(())
}

/// Command-line flags win over the config file and environment
fn apply_diagram_args(config: &mut DocsConfig, args: &DiagramArgs) -> Result<()> {
    if let Some(png) = &args.png {
        config.diagram.png_file = png.clone();
    }
    if let Some(svg) = &args.svg {
        config.diagram.svg_file = svg.clone();
    }
    if let Some(width) = args.width {
        config.diagram.width = width;
    }
    if let Some(height) = args.height {
        config.diagram.height = height;
    }
    if let Some(renderer) = &args.renderer {
        config.renderer.kind = renderer.parse()?;
    }
    if let Some(source) = &args.source {
        config.diagram.source_file = Some(source.clone());
    }
    config.validate()?;
    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
