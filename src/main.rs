use carcheck_smoke::structs::cli::Cli;
use carcheck_smoke::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli.command).await {
        log::debug!("{:?}", e);
        anyhow::bail!(e.user_message());
    }
    Ok(())
}
