use std::collections::HashSet;
use chrono::NaiveDateTime;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::analyzer::{Analyzer, MonthCount};
use crate::parser::Condition;
use crate::transaction::Transaction;

/// Run a `LIST` statement: the full collection or one filter
pub(crate) fn run_select(analyzer: &Analyzer, condition: Option<Condition>) {
    let transactions = match &condition {
        None => analyzer.transactions().iter().collect(),
        Some(Condition::Kind(kind)) => analyzer.by_kind(kind),
        Some(Condition::Merchant(merchant)) => analyzer.by_merchant(merchant),
        Some(Condition::AmountBetween(min, max)) => analyzer.by_amount_range(*min, *max),
        Some(Condition::DateBetween(start, end)) => analyzer.in_date_range(*start, *end),
        Some(Condition::Before(date)) => analyzer.before_date(*date),
    };

    print_transactions(&transactions);
}

pub(crate) fn print_transactions(transactions: &[&Transaction]) {
    let mut table = new_table();
    table.set_header(vec!["ID", "Kind", "Date", "Merchant", "Description", "Amount"]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(t.id.as_str()),
            Cell::new(t.kind.as_str()),
            Cell::new(format_date(t.date).as_str()),
            Cell::new(t.merchant.as_str()),
            Cell::new(t.description.as_str()),
            Cell::new(format_amount(t.amount).as_str()).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_kinds(kinds: &HashSet<&str>) {
    let mut table = new_table();
    table.set_header(vec!["Kind"]);

    // Stable output order for an unordered set
    let mut kinds: Vec<&str> = kinds.iter().copied().collect();
    kinds.sort_unstable();
    for kind in kinds {
        table.add_row(vec![Cell::new(kind)]);
    }

    println!("{table}");
}

pub(crate) fn print_amount(label: &str, amount: f64) {
    let mut table = new_table();
    table.set_header(vec![label]);
    table.add_row(vec![Cell::new(format_amount(amount).as_str()).set_alignment(CellAlignment::Right)]);
    println!("{table}");
}

pub(crate) fn print_month_count(busiest: &MonthCount, debit_only: bool) {
    let mut table = new_table();
    let count_header = if debit_only { "Debit transactions" } else { "Transactions" };
    table.set_header(vec!["Month", count_header]);
    table.add_row(vec![
        Cell::new(busiest.month.to_string().as_str()).set_alignment(CellAlignment::Right),
        Cell::new(busiest.count.to_string().as_str()).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");
}

pub(crate) fn print_descriptions(descriptions: &[&str]) {
    let mut table = new_table();
    table.set_header(vec!["Description"]);
    for description in descriptions {
        table.add_row(vec![Cell::new(*description)]);
    }
    println!("{table}");
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

/// Format $ amount
fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}
