use clap::Parser;
mod commands;
use bedrock_smoke_core::config;
use bedrock_smoke_core::invoker::Invoker;
use bedrock_smoke_core::runner;
use commands::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let mut cfg = config::load_default()?;
    args.apply(&mut cfg);

    runner::print_banner("Bedrock Endpoint Smoke Test");
    println!("Model ID: {}", cfg.model_id);
    println!("Region: {}", cfg.region);

    let invoker = Invoker::new(cfg)?;
    let outcomes = runner::run_all(&invoker).await;
    runner::print_summary(&outcomes);

    std::process::exit(runner::exit_code(&outcomes));
}
