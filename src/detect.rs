//! File-type detection.

use crate::error::{Error, Result};
use crate::source::csv_reader;
use crate::FileType;
use csv::StringRecord;
use std::io::{Read, Seek, SeekFrom};

/// Classify the export in `reader` by its first row.
///
/// The stream is rewound to its start afterwards, so the caller can parse the
/// whole file from the same handle.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use dkb2homebank::{detect::detect_file_type, FileType};
///
/// let mut input = Cursor::new(b"\"Kontonummer:\";\"DE02120300000000202051\";\n".to_vec());
/// assert_eq!(detect_file_type(&mut input)?, FileType::Giro);
/// # Ok::<(), dkb2homebank::Error>(())
/// ```
pub fn detect_file_type<R: Read + Seek>(reader: &mut R) -> Result<FileType> {
    let first_cell = read_first_cell(reader)?.ok_or(Error::EmptyInput)?;
    let file_type = FileType::classify(&first_cell);
    log::debug!("First cell {:?} classified as {}", first_cell, file_type);
    Ok(file_type)
}

/// First cell of the first row, or `None` for an empty stream. Rewinds `reader`.
pub fn read_first_cell<R: Read + Seek>(reader: &mut R) -> Result<Option<String>> {
    reader.seek(SeekFrom::Start(0))?;

    let mut first_row = StringRecord::new();
    let found = csv_reader(&mut *reader).read_record(&mut first_row)?;

    reader.seek(SeekFrom::Start(0))?;

    if !found {
        return Ok(None);
    }
    Ok(Some(first_row.get(0).unwrap_or_default().to_string()))
}
