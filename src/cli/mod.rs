/// CLI layer: argument parsing, output formatting and progress display.
pub mod args;
pub mod output;
pub mod progress;

pub use args::Cli;
pub use output::{OutputCtx, write_error};
