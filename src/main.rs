use clap::Parser;
use log::error;
use reddit_history::cli::Config;
use std::process;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = reddit_history::cli::run(config).await {
        error!("Script failed!");
        eprintln!("{err}");
        process::exit(1);
    }
}
