//! Agro CLI - submit a leaf image and city, print weather, diagnosis and advice.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "agro-cli",
    version,
    about = "Smart agro advisor client"
)]
struct Cli {
    #[command(subcommand)]
    command: agro_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    agro_cmd::run(cli.command).await
}
