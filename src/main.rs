use anyhow::Context;
use clap::Parser;
use pscan::cli::Cli;

// Probes run one after another, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pscan::init_tracing(cli.verbose);

    cli.execute()
        .await
        .with_context(|| format!("pscan {} failed", command_name(&cli)))
}

fn command_name(cli: &Cli) -> &'static str {
    match cli.command {
        pscan::cli::Commands::Hosts(_) => "hosts",
        pscan::cli::Commands::Scan(_) => "scan",
    }
}
