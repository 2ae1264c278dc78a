use anyhow::Result;
use cascade::app;
use cascade::cli::Cli;
use clap::Parser;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    cascade::debug::init_log_bridge(cli.log_level, cli.log_file.as_deref())?;
    log::info!("Starting cascade {}", cascade::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = app::run(&cli, &mut out);

    if let Err(ref e) = result {
        log::error!("{e:#}");
        eprintln!("cascade: error: {e:#}");
    }
    log::logger().flush();
    result
}
