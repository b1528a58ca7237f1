//! Terminal command shell: tokenizer, history, command table and handlers.

pub mod command;
pub mod exec;
pub mod history;
pub mod math;
pub mod output;
pub mod tokenize;

pub use command::{HelpSection, ShellCommand};
pub use exec::{execute, parse_int, CommandError, ShellContext, UNKNOWN_COMMAND};
pub use history::History;
pub use math::MathError;
pub use output::{Line, LineKind, Output, ShellRequest};
pub use tokenize::tokenize;
