//! Tooling & Integration Layer
//!
//! The user-facing surfaces: the one-shot CLI, the interactive menu shell,
//! the prompting loops behind it and the message catalogue.

pub mod cli;
pub mod messages;
pub mod prompt;
pub mod shell;

pub use cli::{Cli, CliContext, Commands};
pub use prompt::{Acquirer, Acquisition, Prompter, ScriptedPrompter, TerminalPrompter};
pub use shell::{MenuCommand, Shell};
