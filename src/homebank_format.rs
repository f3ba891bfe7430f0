//! Homebank CSV import format serializer.
//!
//! Homebank expects semicolon separated rows with every value quoted.

use crate::error::Result;
use crate::types::HomebankRecord;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Rows ready to be imported into Homebank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomebankStatement {
    pub records: Vec<HomebankRecord>,
}

impl HomebankStatement {
    /// Write the statement to any destination implementing `Write`.
    ///
    /// The header row is always written, even for an empty statement.
    ///
    /// # Examples
    ///
    /// ```
    /// use dkb2homebank::homebank_format::HomebankStatement;
    /// use dkb2homebank::types::HomebankRecord;
    ///
    /// let statement = HomebankStatement {
    ///     records: vec![HomebankRecord { date: "01.01.14".into(), ..Default::default() }],
    /// };
    /// let mut out = Vec::new();
    /// statement.write_to(&mut out)?;
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "\"date\";\"paymode\";\"info\";\"payee\";\"memo\";\"amount\";\"category\";\"tags\"\n\
    ///      \"01.01.14\";\"\";\"\";\"\";\"\";\"\";\"\";\"\"\n"
    /// );
    /// # Ok::<(), dkb2homebank::Error>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record([
            "date", "paymode", "info", "payee", "memo", "amount", "category", "tags",
        ])?;
        for record in &self.records {
            csv_writer.serialize(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(statement: &HomebankStatement) -> String {
        let mut out = Vec::new();
        statement.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_empty_statement() {
        assert_eq!(
            render(&HomebankStatement::default()),
            "\"date\";\"paymode\";\"info\";\"payee\";\"memo\";\"amount\";\"category\";\"tags\"\n"
        );
    }

    #[test]
    fn test_write_quotes_and_escapes() {
        let statement = HomebankStatement {
            records: vec![HomebankRecord {
                date: "02.01.2018".into(),
                payment_type_code: "11".into(),
                info: "Gläubiger-ID: DE0012345678\nMandatsreferenz: MAN007".into(),
                payee: "Say \"Hi\" GmbH".into(),
                memo: "a;b".into(),
                amount: "-45,00".into(),
                ..Default::default()
            }],
        };

        let lines = render(&statement);
        let body = lines.split_once('\n').unwrap().1;
        assert_eq!(
            body,
            "\"02.01.2018\";\"11\";\"Gläubiger-ID: DE0012345678\nMandatsreferenz: MAN007\";\"Say \"\"Hi\"\" GmbH\";\"a;b\";\"-45,00\";\"\";\"\"\n"
        );
    }
}
