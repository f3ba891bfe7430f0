//! DKB credit-card export parser.

use crate::error::{Error, Result};
use crate::source::read_records;
use crate::types::CreditRecord;
use crate::FileType;
use std::io::Read;

/// Prefix of the first header cell. The full label differs between export
/// revisions and the preamble above it spans several lines.
const HEADER_PREFIX: &str = "Umsatz abgerechnet";

/// Transactions of a DKB credit-card export, settled or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditStatement {
    pub records: Vec<CreditRecord>,
}

impl CreditStatement {
    /// Parse a credit-card export from any source implementing `Read`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use dkb2homebank::credit_format::CreditStatement;
    ///
    /// let mut file = File::open("kreditkarte.csv")?;
    /// let statement = CreditStatement::from_read(&mut file)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let records = read_records(reader, |cell| cell.starts_with(HEADER_PREFIX))?
            .ok_or(Error::HeaderNotFound(FileType::Credit))?;
        log::debug!("Parsed {} credit card records", records.len());
        Ok(CreditStatement { records })
    }
}
