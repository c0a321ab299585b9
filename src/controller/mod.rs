mod select;

use log::info;

use crate::analyzer::Analyzer;
use crate::parser;
use crate::parser::Statement::{Average, BusiestMonth, Descriptions, Dominant, Find, Insert, Kinds, Select, Total, TotalDebit};

/// Parse one command and run it against the analyzer
pub(crate) fn parse_and_run_command(analyzer: &mut Analyzer, command: &str) -> Result<(), String> {
    let result = parser::parse(command);

    match result {
        Ok(statement) => {
            match statement {
                Select(condition) => {
                    select::run_select(analyzer, condition);
                }
                Find(id) => {
                    match analyzer.find_by_id(&id) {
                        Some(t) => select::print_transactions(&[t]),
                        None => println!("No transaction with id '{id}'"),
                    }
                }
                Kinds => {
                    select::print_kinds(&analyzer.unique_kinds());
                }
                Total(selector) => {
                    let amount = if selector.is_empty() {
                        analyzer.total_amount()
                    } else {
                        analyzer.total_amount_by_date(selector.year, selector.month, selector.day)
                    };
                    select::print_amount("Total", amount);
                }
                TotalDebit => {
                    select::print_amount("Total debit", analyzer.total_debit_amount());
                }
                Average => {
                    match analyzer.average_amount() {
                        Some(average) => select::print_amount("Average", average),
                        None => println!("No transactions loaded, average is undefined"),
                    }
                }
                BusiestMonth(debit_only) => {
                    let busiest = if debit_only {
                        analyzer.busiest_debit_month()
                    } else {
                        analyzer.busiest_month()
                    };
                    select::print_month_count(&busiest, debit_only);
                }
                Dominant => {
                    println!("{}", analyzer.dominant_kind());
                }
                Descriptions => {
                    select::print_descriptions(&analyzer.descriptions());
                }
                Insert(records) => {
                    let records_count = records.len();
                    for record in records {
                        analyzer.add_transaction(record);
                    }
                    info!("{records_count} transactions inserted.");
                }
            }
        }
        Err(e) => {
            return Err(e.to_string());
        }
    }

    Ok(())
}
