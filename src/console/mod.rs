//! Console front end.
//!
//! A line-oriented session over any reader and writer: stdin/stdout in the
//! binary, in-memory buffers in tests.

pub mod commands;
pub mod output;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use commands::{parse_command, Command};
pub use output::Output;
pub use prompt::ask_continue;
pub use session::{run_session, Session};
