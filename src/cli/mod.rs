//! Non-interactive client mode.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run client mode from the raw argument vector.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(&args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'passpanel --help' for usage.");
            std::process::exit(2);
        }
    };
    let _ = context.run();
}
