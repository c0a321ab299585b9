use chrono::NaiveDateTime;

/// The two transaction kinds given special treatment by the debit/credit
/// aggregates. `kind` itself is an open string; any other value is carried
/// through untouched.
pub(crate) const DEBIT: &str = "debit";
pub(crate) const CREDIT: &str = "credit";

/// One financial transaction record held in memory
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) id: String,
    pub(crate) kind: String,
    pub(crate) date: NaiveDateTime,
    pub(crate) merchant: String,
    pub(crate) description: String,
    pub(crate) amount: f64,
}

impl Transaction {
    pub(crate) fn new(id: String, kind: String, date: NaiveDateTime, merchant: String, description: &str, amount: f64) -> Transaction {
        let description = description.replace('\n', " ");
        Transaction {
            id,
            kind,
            date,
            merchant,
            description,
            amount,
        }
    }
}
