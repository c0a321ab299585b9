use chrono::NaiveDateTime;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{char, multispace0, u32};
use nom::combinator::opt;
use nom::multi::many1;
use nom::sequence::delimited;
use nom::IResult;

use crate::parser::{comma, floating_point_num, quoted, yyyy_mm_dd_date, Statement};
use crate::transaction::Transaction;

/// Parse `INSERT (id, kind, amount, date, 'merchant', 'description'), (...)`
pub(crate) fn insert(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("INSERT")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, records) = many1(record)(input)?;
    Ok((input, Statement::Insert(records)))
}

fn record(input: &str) -> IResult<&str, Transaction> {
    let (input, _) = opt(comma)(input)?;
    let (input, _) = multispace0(input)?;
    delimited(char('('), record_inner, char(')'))(input)
}

fn record_inner(input: &str) -> IResult<&str, Transaction> {
    let (input, _) = multispace0(input)?;
    let (input, id) = is_not(", ()")(input)?;
    let (input, _) = comma(input)?;
    let (input, kind) = is_not(", ()")(input)?;
    let (input, _) = comma(input)?;
    let (input, amount) = floating_point_num(input)?;
    let (input, _) = comma(input)?;
    let (input, date) = date_time(input)?;
    let (input, _) = comma(input)?;
    let (input, merchant) = quoted(input)?;
    let (input, _) = comma(input)?;
    let (input, description) = quoted(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, Transaction::new(
        id.to_string(),
        kind.to_string(),
        date,
        merchant.to_string(),
        description,
        amount,
    )))
}

/// YYYY-MM-DD with optional HH:MM:SS, midnight assumed when absent
fn date_time(input: &str) -> IResult<&str, NaiveDateTime> {
    let (input, date) = yyyy_mm_dd_date(input)?;
    let (input, time) = opt(hh_mm_ss)(input)?;
    let (hour, minute, second) = time.unwrap_or((0, 0, 0));

    match date.and_hms_opt(hour, minute, second) {
        Some(date_time) => Ok((input, date_time)),
        None => Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Verify))),
    }
}

fn hh_mm_ss(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, _) = char(' ')(input)?;
    let (input, hour) = u32(input)?;
    let (input, _) = char(':')(input)?;
    let (input, minute) = u32(input)?;
    let (input, _) = char(':')(input)?;
    let (input, second) = u32(input)?;
    Ok((input, (hour, minute, second)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::parser::insert::insert;
    use crate::parser::Statement;

    #[test]
    fn test() {
        let command = "INSERT (10, debit, -30.45, 2020-11-03, 'Corner Cafe', 'lunch'), (11, credit, 2000, 2022-01-20 09:30:00, 'Employer', 'salary')";
        let result = insert(command).unwrap().1;
        assert!(matches!(result, Statement::Insert(..)));
        if let Statement::Insert(records) = result {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].id, "10");
            assert_eq!(records[0].kind, "debit");
            assert_eq!(records[0].amount, -30.45);
            assert_eq!(records[0].merchant, "Corner Cafe");
            assert_eq!(records[1].date.date(), NaiveDate::from_ymd_opt(2022, 1, 20).unwrap());
            assert_eq!(records[1].date.time().to_string(), "09:30:00");
        }
    }
}
