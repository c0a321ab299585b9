mod insert;
mod select;
mod total;

use chrono::NaiveDate;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case, take_till1};
use nom::character::complete::{char, multispace0, multispace1, u32};
use nom::combinator::opt;
use nom::error::ErrorKind;
use nom::sequence::{delimited, preceded};
use nom::{AsChar, IResult, InputTakeAtPosition};

use crate::common::Error;
use crate::transaction::Transaction;

#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// LIST [WHERE condition]
    Select(Option<Condition>),
    /// FIND 'id'
    Find(String),
    /// KINDS
    Kinds,
    /// TOTAL [YEAR n] [MONTH n] [DAY n]
    Total(DateSelector),
    /// TOTAL DEBIT
    TotalDebit,
    /// AVG
    Average,
    /// BUSIEST MONTH [DEBIT]; true restricts the tally to debits
    BusiestMonth(bool),
    /// DOMINANT
    Dominant,
    /// DESCRIPTIONS
    Descriptions,
    /// INSERT (id, kind, amount, date, 'merchant', 'description'), ...
    Insert(Vec<Transaction>),
}

/// Optional date components for wildcard totals. An absent component
/// matches any value.
#[derive(Debug, PartialEq, Default)]
pub(crate) struct DateSelector {
    pub(crate) year: Option<i32>,
    pub(crate) month: Option<u32>,
    pub(crate) day: Option<u32>,
}

impl DateSelector {
    pub(crate) fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Condition {
    Kind(String),
    Merchant(String),
    /// Inclusive amount bounds
    AmountBetween(f64, f64),
    /// Inclusive calendar-date bounds
    DateBetween(NaiveDate, NaiveDate),
    /// Strictly before the date
    Before(NaiveDate),
}

pub(crate) fn parse(command: &str) -> Result<Statement, Error> {
    let result = alt((
        select::select,
        total::total,
        insert::insert,
        find,
        kinds,
        average,
        busiest_month,
        dominant,
        descriptions,
    ))(command.trim());

    match result {
        Ok((_, statement)) => Ok(statement),
        Err(e) => Err(Error::new(e.to_string())),
    }
}

/// FIND 'id' (quotes optional for ids with no whitespace)
fn find(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("FIND")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = alt((quoted, bare_token))(input)?;
    Ok((input, Statement::Find(id.to_string())))
}

fn kinds(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("KINDS")(input)?;
    Ok((input, Statement::Kinds))
}

fn average(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("AVG")(input)?;
    Ok((input, Statement::Average))
}

/// BUSIEST MONTH [DEBIT]
fn busiest_month(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("BUSIEST")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("MONTH")(input)?;
    let (input, debit) = opt(preceded(multispace1, tag_no_case("DEBIT")))(input)?;
    Ok((input, Statement::BusiestMonth(debit.is_some())))
}

fn dominant(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DOMINANT")(input)?;
    Ok((input, Statement::Dominant))
}

fn descriptions(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DESCRIPTIONS")(input)?;
    Ok((input, Statement::Descriptions))
}

/// '...' single-quoted text
pub(crate) fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), is_not("'"), char('\''))(input)
}

fn bare_token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

pub(crate) fn comma(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

pub(crate) fn floating_point_num(input: &str) -> IResult<&str, f64> {
    let (rest, text) = input.split_at_position1_complete(
        |c| {
            let c = c.as_char();
            !(c.is_dec_digit() || c == '.' || c == '-')
        },
        ErrorKind::Float,
    )?;

    match text.parse::<f64>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Float))),
    }
}

pub(crate) fn yyyy_mm_dd_date(input: &str) -> IResult<&str, NaiveDate> {
    let (input, year) = nom::character::complete::i32(input)?;
    let (input, _) = char('-')(input)?;
    let (input, month) = u32(input)?;
    let (input, _) = char('-')(input)?;
    let (input, day) = u32(input)?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok((input, date)),
        None => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(parse("find '2'"), Ok(Statement::Find("2".to_string())));
        assert_eq!(parse("FIND abc-123"), Ok(Statement::Find("abc-123".to_string())));
    }

    #[test]
    fn test_keyword_statements() {
        assert_eq!(parse("kinds"), Ok(Statement::Kinds));
        assert_eq!(parse("AVG"), Ok(Statement::Average));
        assert_eq!(parse("dominant"), Ok(Statement::Dominant));
        assert_eq!(parse("descriptions"), Ok(Statement::Descriptions));
    }

    #[test]
    fn test_busiest_month() {
        assert_eq!(parse("busiest month"), Ok(Statement::BusiestMonth(false)));
        assert_eq!(parse("BUSIEST MONTH DEBIT"), Ok(Statement::BusiestMonth(true)));
    }

    #[test]
    fn test_unknown_statement() {
        assert!(parse("droptables").is_err());
    }

    #[test]
    fn test_yyyy_mm_dd_date() {
        let (_, date) = yyyy_mm_dd_date("2019-02-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 2, 10).unwrap());
        assert!(yyyy_mm_dd_date("2019-13-10").is_err());
    }

    #[test]
    fn test_floating_point_num() {
        assert_eq!(floating_point_num("-30.45, rest"), Ok((", rest", -30.45)));
        assert!(floating_point_num("abc").is_err());
    }
}
