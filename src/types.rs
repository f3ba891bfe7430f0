//! Record types for source rows and destination rows.
//!
//! All fields are kept as text exactly as they appear in the export; dates and
//! amounts are never parsed.

use serde::{Deserialize, Serialize};

/// One transaction row of a DKB checking account export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GiroRecord {
    /// Booking date.
    #[serde(rename = "Buchungstag")]
    pub booking_date: String,

    /// Value date.
    #[serde(rename = "Wertstellung")]
    pub value_date: String,

    /// Transaction type text, e.g. "Lastschrift".
    #[serde(rename = "Buchungstext")]
    pub transaction_text: String,

    /// Payer or payee.
    #[serde(rename = "Auftraggeber / Begünstigter")]
    pub payer_or_payee: String,

    /// Purpose of the transfer.
    #[serde(rename = "Verwendungszweck")]
    pub purpose: String,

    /// Counterparty account number or IBAN.
    #[serde(rename = "Kontonummer")]
    pub account_number: String,

    /// Counterparty bank code or BIC.
    #[serde(rename = "BLZ")]
    pub bank_code: String,

    /// Amount, locale formatted (e.g. "-1.234,56").
    #[serde(rename = "Betrag (EUR)")]
    pub amount: String,

    /// SEPA creditor identifier.
    #[serde(rename = "Gläubiger-ID")]
    pub creditor_id: String,

    /// SEPA mandate reference.
    #[serde(rename = "Mandatsreferenz")]
    pub mandate_reference: String,

    /// Customer reference.
    #[serde(rename = "Kundenreferenz")]
    pub customer_reference: String,
}

/// One transaction row of a DKB credit-card export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreditRecord {
    /// Settlement flag ("Ja"/"Nein"), spelled differently across export revisions.
    #[serde(
        rename = "Umsatz abgerechnet und nicht im Saldo enthalten",
        alias = "Umsatz abgerechnet aber nicht im Saldo enthalten"
    )]
    pub cleared: String,

    /// Value date.
    #[serde(rename = "Wertstellung")]
    pub value_date: String,

    /// Receipt date.
    #[serde(rename = "Belegdatum")]
    pub receipt_date: String,

    /// Merchant description.
    #[serde(rename = "Beschreibung")]
    pub description: String,

    /// Fallback description, used when `description` is empty.
    #[serde(rename = "Umsatzbeschreibung")]
    pub alternate_description: String,

    /// Amount in EUR, locale formatted.
    #[serde(rename = "Betrag (EUR)")]
    pub amount: String,

    /// Amount in the original currency, if any.
    #[serde(rename = "Ursprünglicher Betrag")]
    pub original_amount: String,
}

impl CreditRecord {
    /// Whether the bank has settled this transaction yet.
    pub fn is_cleared(&self) -> bool {
        !matches!(self.cleared.as_str(), "Nein" | "No")
    }
}

/// One row of a Homebank CSV import file.
///
/// `category` and `tags` are never filled in by the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomebankRecord {
    pub date: String,
    #[serde(rename = "paymode")]
    pub payment_type_code: String,
    pub info: String,
    pub payee: String,
    pub memo: String,
    pub amount: String,
    pub category: String,
    pub tags: String,
}

/// Homebank payment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayMode {
    /// No specific mode.
    None,
    /// Credit card.
    CreditCard,
    /// Bank transfer.
    Transfer,
    /// Transfer between own accounts.
    InternalTransfer,
    /// Debit card.
    DebitCard,
    /// Standing order.
    StandingOrder,
    /// Electronic payment.
    ElectronicPayment,
    /// Direct debit.
    DirectDebit,
}

impl PayMode {
    /// Numeric code Homebank expects in the `paymode` column.
    pub fn code(&self) -> &'static str {
        match self {
            PayMode::None => "0",
            PayMode::CreditCard => "1",
            PayMode::Transfer => "4",
            PayMode::InternalTransfer => "5",
            PayMode::DebitCard => "6",
            PayMode::StandingOrder => "7",
            PayMode::ElectronicPayment => "8",
            PayMode::DirectDebit => "11",
        }
    }
}
