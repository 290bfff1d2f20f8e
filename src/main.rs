use anyhow::Result;
use clap::Parser;
use motiontext::cli::{self, Cli, Commands};
use motiontext::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Classification needs no config file
    let config = match cli.command {
        Commands::Classify { .. } => Config::default(),
        _ => cli::load_config(&cli)?,
    };

    // CLI --log-level takes precedence, then MOTIONTEXT_LOG, then the config
    motiontext::debug::init_log_bridge(cli.log_level, config.log_level);
    log::info!("Starting motiontext-probe");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &config, &mut out)
}
