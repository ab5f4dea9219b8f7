mod args;
mod commands;
mod config;
mod paths;

use std::fs;
use std::fs::File;

use clap::Parser;
use simplelog::Config as LogConfig;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::args::Cli;
use crate::config::Config;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
            return;
        }
        if let Err(e) = paths::rotate_logs(dir, paths::KEPT_LOGS) {
            eprintln!("Warning: cannot rotate logs in {}: {}", dir.display(), e);
        }
    }

    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, LogConfig::default(), file) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path.display(), e),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match Config::load() {
        Ok(config) => commands::run(cli, config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
