use clap::Parser;
use log::LevelFilter;

mod cli;
mod clipboard;
mod exits;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let bare = std::env::args_os().len() == 1;
    let flags = CliFlags::parse();
    init_logging(flags.verbose);

    let widget = flags.interactive || (bare && cli::is_interactive() && cli::stdout_is_tty());

    let status = if widget {
        tui::run(&flags.settings_path())
    } else {
        cli::run(flags)
    };
    std::process::exit(status);
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
