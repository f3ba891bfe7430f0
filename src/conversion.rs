//! Mapping of DKB records onto Homebank records.
//!
//! Conversions are expressed with Rust's `From` trait where every source row
//! produces a destination row. Credit-card rows that are not yet settled
//! produce nothing, so that mapping returns an `Option`.

use crate::credit_format::CreditStatement;
use crate::giro_format::GiroStatement;
use crate::homebank_format::HomebankStatement;
use crate::types::{CreditRecord, GiroRecord, HomebankRecord, PayMode};

/// Giro transaction texts (lowercase) and their Homebank payment mode.
const PAYMENT_TYPES: &[(&str, PayMode)] = &[
    ("abschluss", PayMode::None),
    ("lohn, gehalt, rente", PayMode::Transfer),
    ("online-ueberweisung", PayMode::Transfer),
    ("überweisung", PayMode::Transfer),
    ("rücküberweisung", PayMode::Transfer),
    ("wertpapiere", PayMode::Transfer),
    ("zins/dividende", PayMode::Transfer),
    ("auftrag", PayMode::InternalTransfer),
    ("umbuchung", PayMode::InternalTransfer),
    ("kartenzahlung/-abrechnung", PayMode::DebitCard),
    ("sepa-elv-lastschrift", PayMode::DebitCard),
    ("dauerauftrag", PayMode::StandingOrder),
    ("gutschrift", PayMode::ElectronicPayment),
    ("lastschrift", PayMode::DirectDebit),
    ("folgelastschrift", PayMode::DirectDebit),
];

/// Look up the payment mode for a Giro transaction text, ignoring case.
pub fn payment_type(transaction_text: &str) -> Option<PayMode> {
    let key = transaction_text.to_lowercase();
    PAYMENT_TYPES
        .iter()
        .find(|(text, _)| *text == key)
        .map(|&(_, mode)| mode)
}

/// Build the Homebank info column from the reference fields of a Giro row.
fn giro_info(record: &GiroRecord) -> String {
    let mut clauses = Vec::new();

    if !record.account_number.is_empty() {
        if record.account_number.chars().all(|c| c.is_ascii_digit()) {
            clauses.push(format!(
                "Konto-Nr.: {}, BLZ: {}",
                record.account_number, record.bank_code
            ));
        } else {
            clauses.push(format!(
                "IBAN: {}, BIC: {}",
                record.account_number, record.bank_code
            ));
        }
    }
    if !record.creditor_id.is_empty() {
        clauses.push(format!("Gläubiger-ID: {}", record.creditor_id));
    }
    if !record.mandate_reference.is_empty() {
        clauses.push(format!("Mandatsreferenz: {}", record.mandate_reference));
    }
    if !record.customer_reference.is_empty() {
        clauses.push(format!("Kundenreferenz: {}", record.customer_reference));
    }

    clauses.join("\n").trim_end().to_string()
}

impl From<&GiroRecord> for HomebankRecord {
    fn from(record: &GiroRecord) -> Self {
        HomebankRecord {
            date: record.value_date.clone(),
            payment_type_code: payment_type(&record.transaction_text)
                .map(|mode| mode.code().to_string())
                .unwrap_or_default(),
            info: giro_info(record),
            payee: record.payer_or_payee.clone(),
            memo: record.purpose.clone(),
            amount: record.amount.clone(),
            category: String::new(),
            tags: String::new(),
        }
    }
}

impl From<GiroRecord> for HomebankRecord {
    fn from(record: GiroRecord) -> Self {
        HomebankRecord::from(&record)
    }
}

impl HomebankRecord {
    /// Map a credit-card row, or `None` if the bank has not settled it yet.
    pub fn from_credit(record: &CreditRecord) -> Option<Self> {
        if !record.is_cleared() {
            return None;
        }

        let payee = if record.description.is_empty() {
            &record.alternate_description
        } else {
            &record.description
        };

        Some(HomebankRecord {
            date: record.value_date.clone(),
            payment_type_code: PayMode::CreditCard.code().to_string(),
            info: format!("Belegedatum: {}", record.receipt_date),
            payee: payee.clone(),
            memo: record.original_amount.clone(),
            amount: record.amount.clone(),
            category: String::new(),
            tags: String::new(),
        })
    }
}

/// Convert a Giro statement, one Homebank row per source row.
impl From<&GiroStatement> for HomebankStatement {
    fn from(giro: &GiroStatement) -> Self {
        HomebankStatement {
            records: giro.records.iter().map(HomebankRecord::from).collect(),
        }
    }
}

/// Convert a credit-card statement, dropping unsettled rows.
impl From<&CreditStatement> for HomebankStatement {
    fn from(credit: &CreditStatement) -> Self {
        HomebankStatement {
            records: credit
                .records
                .iter()
                .filter_map(|record| {
                    let converted = HomebankRecord::from_credit(record);
                    if converted.is_none() {
                        log::debug!(
                            "Dropping unsettled credit card transaction from {} ({})",
                            record.value_date,
                            record.amount
                        );
                    }
                    converted
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn giro(transaction_text: &str) -> GiroRecord {
        GiroRecord {
            transaction_text: transaction_text.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payment_type_ignores_case() {
        for text in ["DAUERAUFTRAG", "dauerauftrag", "Dauerauftrag"] {
            assert_eq!(HomebankRecord::from(giro(text)).payment_type_code, "7");
        }
        for text in ["ÜBERWEISUNG", "Überweisung", "RÜCKÜBERWEISUNG"] {
            assert_eq!(HomebankRecord::from(giro(text)).payment_type_code, "4");
        }
    }

    #[test]
    fn test_payment_type_table() {
        let expected = [
            ("Abschluss", "0"),
            ("Lohn, Gehalt, Rente", "4"),
            ("Online-Ueberweisung", "4"),
            ("Wertpapiere", "4"),
            ("Zins/Dividende", "4"),
            ("Auftrag", "5"),
            ("Umbuchung", "5"),
            ("Kartenzahlung/-abrechnung", "6"),
            ("SEPA-ELV-Lastschrift", "6"),
            ("Gutschrift", "8"),
            ("Lastschrift", "11"),
            ("Folgelastschrift", "11"),
        ];
        for (text, code) in expected {
            assert_eq!(HomebankRecord::from(giro(text)).payment_type_code, code, "{}", text);
        }
    }

    #[test]
    fn test_unknown_payment_type() {
        assert_eq!(payment_type("Bargeldauszahlung"), None);
        assert_eq!(payment_type(""), None);
        assert_eq!(HomebankRecord::from(giro("Bargeldauszahlung")).payment_type_code, "");
    }

    #[test]
    fn test_abschluss() {
        let record = GiroRecord {
            booking_date: "30.12.13".into(),
            value_date: "01.01.14".into(),
            transaction_text: "ABSCHLUSS".into(),
            payer_or_payee: "".into(),
            purpose: "Abrechnung 30.12.2013      siehe Anlage<br />Kontostand/Rechnungsabschluss am 30.12.2013                     1.234,56 +".into(),
            account_number: "0000202051".into(),
            bank_code: "12030000".into(),
            amount: "1,23".into(),
            creditor_id: "".into(),
            mandate_reference: "".into(),
            customer_reference: "".into(),
        };

        assert_eq!(
            HomebankRecord::from(&record),
            HomebankRecord {
                date: "01.01.14".into(),
                payment_type_code: "0".into(),
                info: "Konto-Nr.: 0000202051, BLZ: 12030000".into(),
                payee: "".into(),
                memo: record.purpose.clone(),
                amount: "1,23".into(),
                category: "".into(),
                tags: "".into(),
            }
        );
    }

    #[test]
    fn test_lohn_gehalt_rente() {
        let record = GiroRecord {
            booking_date: "24.06.13".into(),
            value_date: "24.06.13".into(),
            transaction_text: "LOHN, GEHALT, RENTE".into(),
            payer_or_payee: "ACME GMBH".into(),
            purpose: "LOHN / GEHALT         06/13".into(),
            amount: "1234,56".into(),
            ..Default::default()
        };

        assert_eq!(
            HomebankRecord::from(&record),
            HomebankRecord {
                date: "24.06.13".into(),
                payment_type_code: "4".into(),
                info: "".into(),
                payee: "ACME GMBH".into(),
                memo: "LOHN / GEHALT         06/13".into(),
                amount: "1234,56".into(),
                category: "".into(),
                tags: "".into(),
            }
        );
    }

    #[test]
    fn test_iban_info() {
        let record = GiroRecord {
            account_number: "DE02120300000000202051".into(),
            bank_code: "BYLADEM1001".into(),
            ..Default::default()
        };
        assert_eq!(
            HomebankRecord::from(&record).info,
            "IBAN: DE02120300000000202051, BIC: BYLADEM1001"
        );
    }

    #[test]
    fn test_reference_info_order() {
        let mut record = GiroRecord {
            creditor_id: "DE0012345678".into(),
            mandate_reference: "MAN007".into(),
            customer_reference: "00012345".into(),
            ..Default::default()
        };
        assert_eq!(
            HomebankRecord::from(&record).info,
            "Gläubiger-ID: DE0012345678\nMandatsreferenz: MAN007\nKundenreferenz: 00012345"
        );

        record.mandate_reference.clear();
        assert_eq!(
            HomebankRecord::from(&record).info,
            "Gläubiger-ID: DE0012345678\nKundenreferenz: 00012345"
        );

        record.account_number = "0000202051".into();
        record.bank_code = "12030000".into();
        assert_eq!(
            HomebankRecord::from(&record).info,
            "Konto-Nr.: 0000202051, BLZ: 12030000\nGläubiger-ID: DE0012345678\nKundenreferenz: 00012345"
        );
    }

    #[test]
    fn test_giro_mapping_is_deterministic() {
        let record = GiroRecord {
            value_date: "02.01.2018".into(),
            transaction_text: "Lastschrift".into(),
            creditor_id: "DE0012345678".into(),
            ..Default::default()
        };
        assert_eq!(HomebankRecord::from(&record), HomebankRecord::from(&record));
    }

    #[test]
    fn test_credit_mapping() {
        let record = CreditRecord {
            cleared: "Ja".into(),
            value_date: "15.01.2018".into(),
            receipt_date: "14.01.2018".into(),
            description: "Café Zürich".into(),
            alternate_description: "CAFE ZUERICH".into(),
            amount: "-12,50".into(),
            original_amount: "-13,00 CHF".into(),
        };

        assert_eq!(
            HomebankRecord::from_credit(&record),
            Some(HomebankRecord {
                date: "15.01.2018".into(),
                payment_type_code: "1".into(),
                info: "Belegedatum: 14.01.2018".into(),
                payee: "Café Zürich".into(),
                memo: "-13,00 CHF".into(),
                amount: "-12,50".into(),
                category: "".into(),
                tags: "".into(),
            })
        );
    }

    #[test]
    fn test_credit_alternate_description() {
        let record = CreditRecord {
            cleared: "Ja".into(),
            alternate_description: "CAFE ZUERICH".into(),
            ..Default::default()
        };
        let converted = HomebankRecord::from_credit(&record).unwrap();
        assert_eq!(converted.payee, "CAFE ZUERICH");
    }

    #[test]
    fn test_uncleared_credit_is_dropped() {
        let statement = CreditStatement {
            records: vec![
                CreditRecord {
                    cleared: "Nein".into(),
                    ..Default::default()
                },
                CreditRecord {
                    cleared: "No".into(),
                    ..Default::default()
                },
                CreditRecord {
                    cleared: "Ja".into(),
                    amount: "-1,00".into(),
                    ..Default::default()
                },
            ],
        };

        let homebank = HomebankStatement::from(&statement);
        assert_eq!(homebank.records.len(), 1);
        assert_eq!(homebank.records[0].amount, "-1,00");
    }

    #[test]
    fn test_giro_statement_keeps_every_row() {
        let statement = GiroStatement {
            records: vec![giro("Gutschrift"), giro("Unbekannt"), giro("Lastschrift")],
        };

        let homebank = HomebankStatement::from(&statement);
        let codes: Vec<_> = homebank
            .records
            .iter()
            .map(|r| r.payment_type_code.as_str())
            .collect();
        assert_eq!(codes, vec!["8", "", "11"]);
        assert!(homebank.records.iter().all(|r| r.category.is_empty() && r.tags.is_empty()));
    }
}
