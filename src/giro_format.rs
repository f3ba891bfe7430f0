//! DKB checking account ("Giro") export parser.

use crate::error::{Error, Result};
use crate::source::read_records;
use crate::types::GiroRecord;
use crate::FileType;
use std::io::Read;

/// First cell of the Giro header row.
const HEADER_CELL: &str = "Buchungstag";

/// Transactions of a DKB checking account export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiroStatement {
    /// Transaction rows in file order.
    pub records: Vec<GiroRecord>,
}

impl GiroStatement {
    /// Parse a Giro export from any source implementing `Read`.
    ///
    /// The reader must yield the raw ISO-8859-15 bytes of the file; the
    /// preamble before the header row is skipped.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use dkb2homebank::giro_format::GiroStatement;
    ///
    /// let mut file = File::open("giro.csv")?;
    /// let statement = GiroStatement::from_read(&mut file)?;
    /// println!("{} transactions", statement.records.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let records = read_records(reader, |cell| cell == HEADER_CELL)?
            .ok_or(Error::HeaderNotFound(FileType::Giro))?;
        log::debug!("Parsed {} giro records", records.len());
        Ok(GiroStatement { records })
    }
}
