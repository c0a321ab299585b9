
use std::fmt;
use std::fs;
use std::path::Path;
use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use serde::Deserialize;

use crate::transaction::Transaction;

/// One record as it appears in the transactions JSON file. Amounts arrive
/// as numeric text and dates as date or date-time text; both are converted
/// before the record enters the collection.
#[derive(Deserialize, Debug)]
struct RawRecord {
    transaction_id: String,
    transaction_type: String,
    transaction_amount: String,
    transaction_date: String,
    merchant_name: String,
    transaction_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum JsonError {
    FileNotFoundError(String),
    InvalidFileError(String),
    InvalidRecordError(String),
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "json reading error: {}",
            match self {
                JsonError::FileNotFoundError(s) => s,
                JsonError::InvalidFileError(s) => s,
                JsonError::InvalidRecordError(s) => s,
            }
        )
    }
}

impl std::error::Error for JsonError {}

lazy_static! {
    static ref DATE_ONLY: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    static ref DATE_TIME: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}$").unwrap();
}

/// Read a JSON array of transaction records from `file_path`.
///
/// Malformed amount or date fields fail the whole load with an error
/// naming the offending record, rather than entering the collection as a
/// silently wrong value.
pub(crate) fn read_transactions(file_path: &Path) -> Result<Vec<Transaction>, JsonError> {
    if !file_path.exists() {
        return Err(JsonError::FileNotFoundError(format!("{} not found", file_path.display())));
    }

    let content = fs::read_to_string(file_path)
        .map_err(|e| JsonError::InvalidFileError(format!("{}: {}", file_path.display(), e)))?;

    let raw_records: Vec<RawRecord> = serde_json::from_str(&content)
        .map_err(|e| JsonError::InvalidFileError(format!("{}: {}", file_path.display(), e)))?;

    let mut transactions = Vec::with_capacity(raw_records.len());
    for raw in raw_records {
        transactions.push(convert(raw)?);
    }

    info!("Loaded {} transactions from {}", transactions.len(), file_path.display());
    Ok(transactions)
}

fn convert(raw: RawRecord) -> Result<Transaction, JsonError> {
    let amount = raw.transaction_amount.parse::<f64>().map_err(|_| {
        JsonError::InvalidRecordError(format!(
            "transaction {}: unparsable amount '{}'",
            raw.transaction_id, raw.transaction_amount
        ))
    })?;

    let date = parse_date(&raw.transaction_date).ok_or_else(|| {
        JsonError::InvalidRecordError(format!(
            "transaction {}: unparsable date '{}'",
            raw.transaction_id, raw.transaction_date
        ))
    })?;

    Ok(Transaction::new(
        raw.transaction_id,
        raw.transaction_type,
        date,
        raw.merchant_name,
        &raw.transaction_description,
        amount,
    ))
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and bare
/// `YYYY-MM-DD` (midnight assumed)
fn parse_date(text: &str) -> Option<NaiveDateTime> {
    if DATE_ONLY.is_match(text) {
        return NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    }

    if DATE_TIME.is_match(text) {
        let format = if text.contains('T') { "%Y-%m-%dT%H:%M:%S" } else { "%Y-%m-%d %H:%M:%S" };
        return NaiveDateTime::parse_from_str(text, format).ok();
    }

    None
}
