// Application layer: the operations behind each CLI subcommand.

pub mod commands;
