//! fix-quotes: collapse escaped double quotes in a text file
//!
//! Reads a file, replaces every `\"` with `"`, and writes the result back to
//! the same path.

pub mod error;
pub mod fix;

pub use error::{FixError, Result};
pub use fix::{fix, fix_with, FixOptions, FixReport, WriteMode};
