//! Terminal layer: argument parsing, the interactive menu, input prompts
//! with bounded retry, and output rendering. This is the only layer that
//! touches stdin/stdout or decides exit codes.

pub mod args;
pub mod input;
pub mod menu;
pub mod print;
