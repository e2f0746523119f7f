//! Print the OpenAPI document as JSON, to stdout or a file.

use std::path::PathBuf;

use clap::Parser;
use tradebridge::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Dump the TradeBridge OpenAPI document")]
struct Args {
    /// Write the document here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let json = ApiDoc::openapi().to_pretty_json()?;
    match args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
