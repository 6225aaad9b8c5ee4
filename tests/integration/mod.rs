mod cli_commands;
mod scenarios;
mod support;
