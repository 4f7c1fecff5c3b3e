pub mod check;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod resolver;
pub mod text;

pub use error::{FilelintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
