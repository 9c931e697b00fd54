mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skyflat", about = "Background gradient removal for astronomical images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate background sample points in an image
    Points(commands::points::PointsArgs),
    /// Synthesize a linear background gradient from an image
    Gradient(commands::gradient::GradientArgs),
    /// Subtract a gradient from an image
    Subtract(commands::subtract::SubtractArgs),
    /// Generate a gradient and subtract it in one step
    Flatten(commands::flatten::FlattenArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Points(args) => commands::points::run(args),
        Commands::Gradient(args) => commands::gradient::run(args),
        Commands::Subtract(args) => commands::subtract::run(args),
        Commands::Flatten(args) => commands::flatten::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
