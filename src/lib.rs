//! DKB to Homebank converter library.
//!
//! Converts CSV exports of DKB checking ("Giro") and credit-card accounts into
//! the CSV import format of the Homebank personal-finance application.
//!
//! # Supported Inputs
//!
//! - **Giro**: checking account export, preamble starting with `Kontonummer:`
//! - **Credit**: credit-card export, preamble starting with `Kreditkarte:`
//!
//! Input files are expected in ISO-8859-15. Output is UTF-8.
//!
//! # Examples
//!
//! ## Converting a file
//!
//! ```no_run
//! use dkb2homebank::{config::Config, pipeline};
//!
//! let config = Config::new("export.csv", "homebank.csv")?;
//! let summary = pipeline::run(&config)?;
//! println!("{} transactions written", summary.rows_written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Mapping a single record
//!
//! ```
//! use dkb2homebank::types::{GiroRecord, HomebankRecord};
//!
//! let giro = GiroRecord {
//!     value_date: "24.06.13".into(),
//!     transaction_text: "Dauerauftrag".into(),
//!     ..Default::default()
//! };
//! let homebank = HomebankRecord::from(giro);
//! assert_eq!(homebank.payment_type_code, "7");
//! ```

pub mod error;
pub mod types;
pub mod source;
pub mod detect;
pub mod giro_format;
pub mod credit_format;
pub mod homebank_format;
pub mod conversion;
pub mod config;
pub mod pipeline;

use std::fmt;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{CreditRecord, GiroRecord, HomebankRecord, PayMode};

/// Source layouts a DKB export can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Checking account export
    Giro,
    /// Credit-card export
    Credit,
    /// Neither known layout
    Unknown,
}

impl FileType {
    /// Classify a file by the first cell of its first row.
    pub fn classify(first_cell: &str) -> Self {
        let cell = first_cell.trim_start();
        if cell.starts_with("Kreditkarte:") {
            FileType::Credit
        } else if cell == "Kontonummer:" {
            FileType::Giro
        } else {
            FileType::Unknown
        }
    }

    /// Human-readable name of the layout.
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Giro => "giro",
            FileType::Credit => "credit card",
            FileType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(FileType::classify("Kreditkarte:"), FileType::Credit);
        assert_eq!(FileType::classify("Kreditkarte: 1234"), FileType::Credit);
        assert_eq!(FileType::classify("Kontonummer:"), FileType::Giro);
        assert_eq!(FileType::classify("Buchungstag"), FileType::Unknown);
        assert_eq!(FileType::classify(""), FileType::Unknown);
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::Giro.to_string(), "giro");
        assert_eq!(FileType::Credit.to_string(), "credit card");
    }
}
