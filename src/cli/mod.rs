pub mod commands;

pub use commands::{ApprovalCommands, Cli, Commands};
