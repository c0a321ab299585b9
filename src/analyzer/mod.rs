use std::collections::HashSet;
use std::fmt;
use chrono::{Datelike, NaiveDate};

use crate::transaction::{Transaction, CREDIT, DEBIT};

/// Month number (1-12) together with how many transactions fell in it
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MonthCount {
    pub(crate) month: u32,
    pub(crate) count: usize,
}

/// Which recognised kind dominates the collection by record count
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KindBalance {
    Debit,
    Credit,
    Equal,
}

impl fmt::Display for KindBalance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KindBalance::Debit => write!(f, "debit"),
            KindBalance::Credit => write!(f, "credit"),
            KindBalance::Equal => write!(f, "equal"),
        }
    }
}

/// In-memory query engine over an ordered transaction collection.
///
/// Owns the collection outright: insertion order is preserved, records are
/// never dropped or reordered, and the only mutation is [`add_transaction`]
/// appending to the end. All reads are borrowed views into the owned data.
///
/// [`add_transaction`]: Analyzer::add_transaction
pub(crate) struct Analyzer {
    transactions: Vec<Transaction>,
}

impl Analyzer {
    pub(crate) fn new(transactions: Vec<Transaction>) -> Analyzer {
        Analyzer { transactions }
    }

    /// Append one transaction. Visible to every subsequent query.
    pub(crate) fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Immutable view of the full collection in insertion order
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Distinct `kind` values, duplicates collapsed. Iteration order is
    /// not significant.
    pub(crate) fn unique_kinds(&self) -> HashSet<&str> {
        self.transactions.iter().map(|t| t.kind.as_str()).collect()
    }

    /// Sum of all amounts. 0.0 for an empty collection.
    pub(crate) fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of amounts for transactions whose date matches every component
    /// that was given. A `None` component matches any value, so e.g.
    /// `(None, Some(5), None)` totals every May across all years. Month is
    /// 1-based.
    pub(crate) fn total_amount_by_date(&self, year: Option<i32>, month: Option<u32>, day: Option<u32>) -> f64 {
        self.transactions
            .iter()
            .filter(|t| {
                year.map_or(true, |y| t.date.year() == y)
                    && month.map_or(true, |m| t.date.month() == m)
                    && day.map_or(true, |d| t.date.day() == d)
            })
            .map(|t| t.amount)
            .sum()
    }

    /// Transactions of exactly the given kind, original relative order
    pub(crate) fn by_kind(&self, kind: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.kind == kind).collect()
    }

    /// Transactions whose calendar date falls within `start..=end`.
    /// Time-of-day is ignored. `start > end` yields an empty result.
    pub(crate) fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| {
                let date = t.date.date();
                date >= start && date <= end
            })
            .collect()
    }

    /// Exact, case-sensitive merchant match
    pub(crate) fn by_merchant(&self, merchant: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.merchant == merchant).collect()
    }

    /// Mean amount over the whole collection. An empty collection has no
    /// defined average, so this returns `None` rather than NaN.
    pub(crate) fn average_amount(&self) -> Option<f64> {
        if self.transactions.is_empty() {
            None
        } else {
            Some(self.total_amount() / self.transactions.len() as f64)
        }
    }

    /// Transactions with `min <= amount <= max`. `min > max` yields an
    /// empty result.
    pub(crate) fn by_amount_range(&self, min: f64, max: f64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.amount >= min && t.amount <= max)
            .collect()
    }

    /// Sum of amounts where `kind == "debit"`. 0.0 when there are none.
    pub(crate) fn total_debit_amount(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == DEBIT)
            .map(|t| t.amount)
            .sum()
    }

    /// Month with the most transactions of any kind. Months are tallied
    /// into a fixed January-to-December table and the first maximum wins,
    /// so ties resolve to the lowest month number. An empty collection
    /// degenerates to month 1 with count 0.
    pub(crate) fn busiest_month(&self) -> MonthCount {
        Self::busiest(self.transactions.iter())
    }

    /// Same as [`busiest_month`] restricted to debit transactions
    ///
    /// [`busiest_month`]: Analyzer::busiest_month
    pub(crate) fn busiest_debit_month(&self) -> MonthCount {
        Self::busiest(self.transactions.iter().filter(|t| t.kind == DEBIT))
    }

    fn busiest<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> MonthCount {
        let mut tally = [0usize; 12];
        for t in transactions {
            tally[t.date.month0() as usize] += 1;
        }

        let mut best = 0;
        for (index, count) in tally.iter().enumerate() {
            if *count > tally[best] {
                best = index;
            }
        }

        MonthCount {
            month: best as u32 + 1,
            count: tally[best],
        }
    }

    /// Compare debit and credit record counts. `Equal` covers the exact
    /// tie, including the empty collection.
    pub(crate) fn dominant_kind(&self) -> KindBalance {
        let debits = self.by_kind(DEBIT).len();
        let credits = self.by_kind(CREDIT).len();
        if debits > credits {
            KindBalance::Debit
        } else if debits < credits {
            KindBalance::Credit
        } else {
            KindBalance::Equal
        }
    }

    /// Transactions strictly before the given calendar date
    pub(crate) fn before_date(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.date.date() < date).collect()
    }

    /// First transaction with the given id, `None` when absent
    pub(crate) fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Description of every transaction, same order and length as the
    /// collection itself
    pub(crate) fn descriptions(&self) -> Vec<&str> {
        self.transactions.iter().map(|t| t.description.as_str()).collect()
    }
}
