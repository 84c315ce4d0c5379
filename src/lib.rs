pub mod candidate;
pub mod capabilities;
pub mod checker;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod validator;

pub use error::{GuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
/// Fatal startup or input problem. Git reports it as 255 to the pusher.
pub const EXIT_CONFIG_ERROR: i32 = 255;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
