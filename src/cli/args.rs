use clap::Parser;

/// Process flags for the interactive ordering console
#[derive(Debug, Clone, Parser)]
#[command(name = "food-order")]
#[command(about = "Interactive console for ordering from a fixed menu")]
pub struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
