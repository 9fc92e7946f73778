use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagscope::{sample::sample_page, Destination, RenderConfig, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: u8,

    /// Render unrendered children as empty instead of failing
    #[arg(long)]
    permissive: bool,
}

fn main() {
    // Logs go to stderr so they never mix with the markup on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = RenderConfig {
        indent_spaces: usize::from(args.indent),
        strict: !args.permissive,
    };
    let destination = Destination::from(args.output);

    info!("Rendering sample page to {:?}", destination);
    sample_page(destination, config)?;

    Ok(())
}
