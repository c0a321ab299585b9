use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{multispace0, multispace1};
use nom::combinator::opt;
use nom::IResult;

use crate::parser::{floating_point_num, quoted, yyyy_mm_dd_date, Condition, Statement};

/// Parse `LIST [WHERE condition]`
pub(crate) fn select(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("LIST")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, condition) = opt(where_parser)(input)?;
    Ok((input, Statement::Select(condition)))
}

/// WHERE ...
fn where_parser(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("WHERE")(input)?;
    let (input, _) = multispace1(input)?;
    alt((where_kind, where_merchant, where_amount, where_date_between, where_before))(input)
}

/// kind = 'debit'
fn where_kind(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("kind")(input)?;
    let (input, _) = eq_operator(input)?;
    let (input, kind) = quoted(input)?;
    Ok((input, Condition::Kind(kind.to_string())))
}

/// merchant = 'SuperMart'
fn where_merchant(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("merchant")(input)?;
    let (input, _) = eq_operator(input)?;
    let (input, merchant) = quoted(input)?;
    Ok((input, Condition::Merchant(merchant.to_string())))
}

/// amount BETWEEN 10 AND 100.5
fn where_amount(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("amount")(input)?;
    let (input, _) = between_keyword(input)?;
    let (input, min) = floating_point_num(input)?;
    let (input, _) = and_keyword(input)?;
    let (input, max) = floating_point_num(input)?;
    Ok((input, Condition::AmountBetween(min, max)))
}

/// date BETWEEN 2019-01-01 AND 2019-12-31
fn where_date_between(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("date")(input)?;
    let (input, _) = between_keyword(input)?;
    let (input, start) = yyyy_mm_dd_date(input)?;
    let (input, _) = and_keyword(input)?;
    let (input, end) = yyyy_mm_dd_date(input)?;
    Ok((input, Condition::DateBetween(start, end)))
}

/// date < 2019-03-01
fn where_before(input: &str) -> IResult<&str, Condition> {
    let (input, _) = tag_no_case("date")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = tag("<")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, date) = yyyy_mm_dd_date(input)?;
    Ok((input, Condition::Before(date)))
}

/// ' = '
fn eq_operator(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = tag("=")(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// ' BETWEEN '
fn between_keyword(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("BETWEEN")(input)?;
    let (input, _) = multispace1(input)?;
    Ok((input, ()))
}

/// ' AND '
fn and_keyword(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("AND")(input)?;
    let (input, _) = multispace1(input)?;
    Ok((input, ()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::parser::select::select;
    use crate::parser::{Condition, Statement};

    #[test]
    fn test() {
        let command = "list";
        assert_eq!(select(command), Ok(("", Statement::Select(None))));

        let command = "LIST WHERE kind = 'debit'";
        assert_eq!(select(command), Ok(("", Statement::Select(Some(Condition::Kind("debit".to_string()))))));

        let command = "list where merchant = 'Corner Cafe'";
        assert_eq!(select(command), Ok(("", Statement::Select(Some(Condition::Merchant("Corner Cafe".to_string()))))));

        let command = "list where amount between 10 and 99.5";
        assert_eq!(select(command), Ok(("", Statement::Select(Some(Condition::AmountBetween(10.0, 99.5))))));

        let command = "list where date between 2019-01-01 and 2019-12-31";
        let expected = Condition::DateBetween(
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2019, 12, 31).unwrap(),
        );
        assert_eq!(select(command), Ok(("", Statement::Select(Some(expected)))));

        let command = "list where date < 2019-03-01";
        let expected = Condition::Before(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
        assert_eq!(select(command), Ok(("", Statement::Select(Some(expected)))));
    }
}
