//! Run configuration.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Paths for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DKB export to read.
    pub input: PathBuf,
    /// Homebank CSV to write.
    pub output: PathBuf,
}

impl Config {
    /// Create a configuration, rejecting empty paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<Self> {
        let input = input.into();
        let output = output.into();

        if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
            return Err(Error::Config(
                "input and output file must be given".to_string(),
            ));
        }

        Ok(Config { input, output })
    }
}
