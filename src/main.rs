mod app;
mod cache;
mod cli;
mod config;
mod consts;
mod error;
mod fetcher;
mod puzzle;
mod session;

use clap::Parser;
use log::{error, info};

use app::Outcome;
use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let cli = cli.with_config(&Config::load());

    match app::run(&cli) {
        Ok(Outcome::Cached) => {
            info!("{} already present", cli.input_file().display());
        }
        Ok(Outcome::Downloaded { bytes }) => {
            info!("Wrote {bytes} bytes to {}", cli.input_file().display());
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
