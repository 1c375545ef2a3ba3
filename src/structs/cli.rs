use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "carcheck-smoke")]
#[clap(about = "Smoke test for the CarCheck search and analysis API", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
