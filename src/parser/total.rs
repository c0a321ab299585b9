use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{i32, multispace1, u32};
use nom::combinator::opt;
use nom::IResult;

use crate::parser::{DateSelector, Statement};

/// Parse `TOTAL DEBIT` and `TOTAL [YEAR n] [MONTH n] [DAY n]`. Each date
/// clause is optional; a bare `TOTAL` is the grand total.
pub(crate) fn total(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("TOTAL")(input)?;
    alt((total_debit, total_by_date))(input)
}

/// TOTAL DEBIT
fn total_debit(input: &str) -> IResult<&str, Statement> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("DEBIT")(input)?;
    Ok((input, Statement::TotalDebit))
}

fn total_by_date(input: &str) -> IResult<&str, Statement> {
    let (input, year) = opt(year_clause)(input)?;
    let (input, month) = opt(month_clause)(input)?;
    let (input, day) = opt(day_clause)(input)?;
    Ok((input, Statement::Total(DateSelector { year, month, day })))
}

/// YEAR 2019
fn year_clause(input: &str) -> IResult<&str, i32> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("YEAR")(input)?;
    let (input, _) = multispace1(input)?;
    i32(input)
}

/// MONTH 5
fn month_clause(input: &str) -> IResult<&str, u32> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("MONTH")(input)?;
    let (input, _) = multispace1(input)?;
    u32(input)
}

/// DAY 25
fn day_clause(input: &str) -> IResult<&str, u32> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("DAY")(input)?;
    let (input, _) = multispace1(input)?;
    u32(input)
}

#[cfg(test)]
mod tests {
    use crate::parser::total::total;
    use crate::parser::{DateSelector, Statement};

    #[test]
    fn test() {
        let command = "total";
        assert_eq!(total(command), Ok(("", Statement::Total(DateSelector::default()))));

        let command = "TOTAL DEBIT";
        assert_eq!(total(command), Ok(("", Statement::TotalDebit)));

        let command = "total year 2019 month 2 day 10";
        let expected = DateSelector { year: Some(2019), month: Some(2), day: Some(10) };
        assert_eq!(total(command), Ok(("", Statement::Total(expected))));

        // Month alone acts as a wildcard across years
        let command = "total month 5";
        let expected = DateSelector { year: None, month: Some(5), day: None };
        assert_eq!(total(command), Ok(("", Statement::Total(expected))));

        let command = "total year 2019 day 1";
        let expected = DateSelector { year: Some(2019), month: None, day: Some(1) };
        assert_eq!(total(command), Ok(("", Statement::Total(expected))));
    }
}
