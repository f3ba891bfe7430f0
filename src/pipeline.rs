//! End-to-end conversion of one DKB export into one Homebank file.

use crate::config::Config;
use crate::credit_format::CreditStatement;
use crate::detect::{detect_file_type, read_first_cell};
use crate::error::{Error, Result};
use crate::giro_format::GiroStatement;
use crate::homebank_format::HomebankStatement;
use crate::FileType;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};

/// Outcome of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Detected layout of the input.
    pub file_type: FileType,
    /// Transaction rows found in the input.
    pub rows_read: usize,
    /// Rows written to the output.
    pub rows_written: usize,
    /// Rows left out (unsettled credit-card transactions).
    pub rows_skipped: usize,
}

/// Detect, parse and map the export in `input`.
pub fn parse_input<R: Read + Seek>(input: &mut R) -> Result<(ConversionSummary, HomebankStatement)> {
    let file_type = detect_file_type(input)?;
    log::info!("Detected {} export", file_type);

    let (rows_read, homebank) = match file_type {
        FileType::Giro => {
            let giro = GiroStatement::from_read(input)?;
            (giro.records.len(), HomebankStatement::from(&giro))
        }
        FileType::Credit => {
            let credit = CreditStatement::from_read(input)?;
            (credit.records.len(), HomebankStatement::from(&credit))
        }
        FileType::Unknown => {
            let first_cell = read_first_cell(input)?.unwrap_or_default();
            return Err(Error::UnknownFileType(first_cell));
        }
    };

    let summary = ConversionSummary {
        file_type,
        rows_read,
        rows_written: homebank.records.len(),
        rows_skipped: rows_read - homebank.records.len(),
    };
    Ok((summary, homebank))
}

/// Convert a DKB export read from `input` into Homebank CSV written to `output`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use dkb2homebank::{pipeline::convert, FileType};
///
/// let mut input = Cursor::new(
///     b"\"Kontonummer:\";\"123\";\n\"Buchungstag\";\"Wertstellung\";\"Buchungstext\";\n\"01.02.18\";\"02.02.18\";\"Gutschrift\";\n".to_vec(),
/// );
/// let mut output = Vec::new();
/// let summary = convert(&mut input, &mut output)?;
/// assert_eq!(summary.file_type, FileType::Giro);
/// assert_eq!(summary.rows_written, 1);
/// # Ok::<(), dkb2homebank::Error>(())
/// ```
pub fn convert<R, W>(input: &mut R, output: &mut W) -> Result<ConversionSummary>
where
    R: Read + Seek,
    W: Write,
{
    let (summary, homebank) = parse_input(input)?;
    homebank.write_to(output)?;
    Ok(summary)
}

/// Convert the files named in `config`.
///
/// The output file is only created once the input has been parsed, so a
/// failed run on an unreadable or unrecognised export leaves nothing behind.
pub fn run(config: &Config) -> Result<ConversionSummary> {
    let mut input = File::open(&config.input)?;
    let (summary, homebank) = parse_input(&mut input)?;

    let mut output = BufWriter::new(File::create(&config.output)?);
    homebank.write_to(&mut output)?;
    output.flush()?;

    log::info!(
        "Wrote {} of {} transactions to {}",
        summary.rows_written,
        summary.rows_read,
        config.output.display()
    );
    Ok(summary)
}
