mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use quiet::{is_interactive, stdout_is_tty};

/// Run CLI mode and return the process exit status.
pub fn run(flags: CliFlags) -> i32 {
    quiet::set(flags.quiet);
    let mut context = Context::new(flags);
    match context.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
