mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod session;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use error::AppError;
use output::Locale;
use utils::{Timezone, set_debug};

fn main() {
    let raw = Cli::parse();
    let config = Config::load(raw.debug);
    let cli = raw.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let locale = Locale::from_locale(cli.locale.as_deref())?;
    let timezone = Timezone::parse(cli.timezone.as_deref())?;

    let ctx = CommandContext {
        cli,
        locale,
        timezone,
        jq_filter: cli.jq.as_deref(),
    };
    app::run(&ctx)
}
