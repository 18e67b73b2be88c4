//! Command handlers for CLI subcommands

mod serve;

pub use serve::ServeCommandHandler;
