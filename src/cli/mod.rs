//! CLI subcommand implementations for the routemap binary.

pub mod map_cmd;
pub mod output;
