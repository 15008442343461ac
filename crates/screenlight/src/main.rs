#![cfg_attr(windows, windows_subsystem = "windows")]

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "screenlight",
    version,
    about = "A full-screen light panel that keeps the display awake"
)]
struct Cli {
    /// Open a console and print diagnostics to it
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

#[cfg(windows)]
fn run(cli: &Cli) -> i32 {
    use screenlight_core::{config, log, log_warn};
    use screenlight_windows::HostOptions;

    if cli.verbose {
        screenlight_windows::console::attach();
    }

    let (config, warning) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    log::init(&config.logging, cli.verbose);
    if let Some(warning) = warning {
        log_warn!("Ignoring config file: {warning}");
    }

    screenlight_windows::run(HostOptions {
        animate: config.animation.enabled,
        tick_ms: config.animation.tick_ms,
    })
}

#[cfg(not(windows))]
fn run(_cli: &Cli) -> i32 {
    eprintln!("screenlight only runs on Windows");
    1
}
