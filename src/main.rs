use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "basket", about = "Terminal grocery checklist")]
struct Args {
    /// Placeholder text shown in the empty input field
    #[arg(long, default_value = "Grocery..")]
    placeholder: String,

    /// Log at debug level instead of info
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to basket.log in current directory.
    // Init failure is non-fatal; the app just runs unlogged.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create("basket.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("basket starting up");

    match basket::tui::run(args.placeholder) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Alas, there's been an error: {e}");
            ExitCode::FAILURE
        }
    }
}
