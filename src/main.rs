use clap::Parser;
use coordgrid::cli::{run, Cli};
use coordgrid::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
