//! Utility modules for charm-tools
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: File operations and directory management
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;

use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
