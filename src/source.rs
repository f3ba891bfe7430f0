//! Input boundary shared by all DKB layouts.
//!
//! Exports are ISO-8859-15 encoded, semicolon separated and start with a
//! preamble of account metadata. Everything past this module works on UTF-8.

use crate::error::{Error, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use encoding_rs::ISO_8859_15;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Wrap a raw byte stream so that it yields UTF-8.
pub fn decode<R: Read>(reader: R) -> DecodeReaderBytes<R, Vec<u8>> {
    DecodeReaderBytesBuilder::new()
        .encoding(Some(ISO_8859_15))
        .build(reader)
}

/// Position of a [`TrimLeadingSpace`] reader within the current field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    /// A quote inside a quoted field: either its end or the first half of `""`.
    QuoteInQuoted,
}

/// Drops spaces and tabs at the start of every field before the CSV
/// tokenizer sees them, so ` "a;b"` is still read as one quoted field.
/// Whitespace inside quoted fields is kept.
pub struct TrimLeadingSpace<R> {
    inner: R,
    state: FieldState,
}

impl<R: Read> TrimLeadingSpace<R> {
    pub fn new(inner: R) -> Self {
        TrimLeadingSpace {
            inner,
            state: FieldState::Start,
        }
    }

    /// Advance the state machine by one byte, returning whether to keep it.
    fn keep(&mut self, byte: u8) -> bool {
        let at_boundary = matches!(byte, b';' | b'\n' | b'\r');
        match self.state {
            FieldState::Start => match byte {
                b' ' | b'\t' => return false,
                b'"' => self.state = FieldState::Quoted,
                _ if at_boundary => {}
                _ => self.state = FieldState::Unquoted,
            },
            FieldState::Unquoted => {
                if at_boundary {
                    self.state = FieldState::Start;
                }
            }
            FieldState::Quoted => {
                if byte == b'"' {
                    self.state = FieldState::QuoteInQuoted;
                }
            }
            FieldState::QuoteInQuoted => {
                self.state = match byte {
                    b'"' => FieldState::Quoted,
                    _ if at_boundary => FieldState::Start,
                    _ => FieldState::Unquoted,
                };
            }
        }
        true
    }
}

impl<R: Read> Read for TrimLeadingSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }

            let mut kept = 0;
            for i in 0..n {
                let byte = buf[i];
                if self.keep(byte) {
                    buf[kept] = byte;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

/// CSV reader for the DKB dialect over an undecoded byte stream.
pub fn csv_reader<R: Read>(
    reader: R,
) -> Reader<TrimLeadingSpace<DecodeReaderBytes<R, Vec<u8>>>> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(TrimLeadingSpace::new(decode(reader)))
}

/// Read all data rows following the first row accepted by `is_header`.
///
/// Rows before the header are preamble and are ignored. Data rows are matched
/// to record fields by header name.
pub fn read_records<R, T>(reader: R, is_header: impl Fn(&str) -> bool) -> Result<Option<Vec<T>>>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = csv_reader(reader);
    let mut headers: Option<StringRecord> = None;
    let mut records = Vec::new();

    for result in rdr.records() {
        let mut row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let Some(header) = headers.as_ref() else {
            if row.get(0).is_some_and(|cell| is_header(cell)) {
                log::debug!("Header found at line {}", line);
                headers = Some(row);
            } else {
                log::debug!("Skipping preamble line {}", line);
            }
            continue;
        };

        if row.iter().all(str::is_empty) {
            continue;
        }

        while row.len() < header.len() {
            row.push_field("");
        }

        let record = row
            .deserialize(Some(header))
            .map_err(|source| Error::Record { line, source })?;
        records.push(record);
    }

    Ok(headers.map(|_| records))
}
