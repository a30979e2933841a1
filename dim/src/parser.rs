/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit1, one_of, space0},
    combinator::{map_res, not, opt, recognize, value},
    multi::{fold_many1, many0, many1_count},
    number::complete::double,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::si::unit_literal;

use super::{DimError, Quantity};

/// Parse a unit expression (e.g. `kg*m/s^2` or `N m`) to the quantity
/// one such unit represents. The empty string is dimensionless one.
pub fn parse_unit(input: &str) -> Result<Quantity, DimError> {
    let input = input.trim();
    log::trace!("parsing unit expression {:?}", input);
    check_characters(input)?;

    if input.is_empty() {
        return Ok(Quantity::ONE);
    }

    match unit_expression(input) {
        Ok(("", q)) => q.and_then(Quantity::checked),
        Ok((r, _)) => Err(leftover(input, r)),
        Err(err) => Err(DimError::Grammar(format!("{}", err))),
    }
}

/// Parse a unit expression given as raw bytes.
pub fn parse_unit_bytes(input: &[u8]) -> Result<Quantity, DimError> {
    match std::str::from_utf8(input) {
        Ok(s) => parse_unit(s),
        Err(e) => Err(DimError::Lexical(
            e.valid_up_to(),
            String::from("invalid UTF-8"),
        )),
    }
}

/// Parse a number followed by an optional unit expression, e.g.
/// `9.81 m/s^2` or `1_(m^2*s^-1)`.
pub fn parse_quantity(input: &str) -> Result<Quantity, DimError> {
    let input = input.trim();
    check_characters(input)?;

    match quantity(input) {
        Ok(("", q)) => q.and_then(Quantity::checked),
        Ok((r, _)) => Err(leftover(input, r)),
        Err(err) => Err(DimError::Grammar(format!("{}", err))),
    }
}

/// Split text into a leading number and the symbol that follows it.
/// One separator (space, `_` or `*`) between the two is dropped.
/// NaN and infinite numbers are rejected.
pub fn split_value(input: &str) -> Result<(f64, &str), DimError> {
    let input = input.trim_start();
    match number_and_separator(input) {
        Ok((_, value)) if !value.is_finite() => Err(DimError::BadQuantity),
        Ok((rest, value)) => Ok((value, rest)),
        Err(_) => Err(DimError::Grammar(format!(
            "expected a number at {:?}",
            input
        ))),
    }
}

fn leftover(input: &str, rest: &str) -> DimError {
    DimError::Grammar(format!(
        "Leftover input at offset {}: {}",
        input.len() - rest.len(),
        rest
    ))
}

/// Characters that may appear in a unit symbol.
pub(crate) fn is_symbol_char(c: char) -> bool {
    c.is_alphabetic() || c == '°'
}

fn is_superscript(c: char) -> bool {
    matches!(c, '⁰' | '¹' | '²' | '³' | '⁴'..='⁹' | '⁺' | '⁻')
}

fn is_expression_char(c: char) -> bool {
    is_symbol_char(c)
        || is_superscript(c)
        || c.is_ascii_digit()
        || matches!(
            c,
            '*' | '/' | '^' | '(' | ')' | '+' | '-' | '_' | '.' | ' '
        )
}

fn check_characters(input: &str) -> Result<(), DimError> {
    match input.char_indices().find(|(_, c)| !is_expression_char(*c)) {
        Some((pos, c)) => Err(DimError::Lexical(pos, c.to_string())),
        None => Ok(()),
    }
}

/* Grammar:
 *
 *   expression := '*'? term (operator term)*
 *   term       := ( '(' expression ')' | symbol ) exponent?
 *   exponent   := '^' group | superscript
 *   group      := '(' group ')' | [+-]? digits
 *
 * Multiplication and division share one precedence level and
 * associate to the left. A run of spaces, underscores or dots between
 * two terms multiplies them.
 */

#[derive(Clone, Copy, Debug)]
enum Operator {
    Multiply,
    Divide,
}

/// Parser for unit expressions.
pub fn unit_expression(
    input: &str,
) -> IResult<&str, Result<Quantity, DimError>> {
    preceded(opt(char('*')), product)(input)
}

/// Parser for quantities (number and unit).
pub fn quantity(input: &str) -> IResult<&str, Result<Quantity, DimError>> {
    let (input, (value, unit)) =
        pair(double, opt(preceded(separator, product)))(input)?;
    Ok((
        input,
        unit.unwrap_or(Ok(Quantity::ONE)).map(|q| q * value),
    ))
}

fn number_and_separator(input: &str) -> IResult<&str, f64> {
    let (input, value) = double(input)?;
    let (input, sep) = opt(one_of(" _*"))(input)?;
    let (input, _) = match sep {
        Some('*') => not(char('*'))(input)?,
        _ => (input, ()),
    };
    Ok((input, value))
}

/// Terms joined by operators, without the leading `*`.
fn product(input: &str) -> IResult<&str, Result<Quantity, DimError>> {
    let (input, (first, rest)) =
        pair(term, many0(pair(operator, term)))(input)?;

    Ok((
        input,
        first.and_then(|q| {
            rest.into_iter()
                .try_fold(q, |acc, (op, t)| compose(acc, op, t?))
        }),
    ))
}

fn compose(
    acc: Quantity,
    op: Operator,
    t: Quantity,
) -> Result<Quantity, DimError> {
    let (value, dimension) = match op {
        Operator::Multiply => (acc.0 * t.0, acc.1.checked_multiply(t.1)),
        Operator::Divide => (acc.0 / t.0, acc.1.checked_divide(t.1)),
    };
    match dimension {
        Some(dimension) => Ok(Quantity(value, dimension)),
        None => Err(DimError::Grammar(format!(
            "Exponent out of range combining {} and {}",
            acc.1, t.1
        ))),
    }
}

fn power(q: Quantity, n: i32) -> Result<Quantity, DimError> {
    match q.1.checked_powi(n) {
        Some(dimension) => Ok(Quantity(q.0.powi(n), dimension)),
        None => Err(DimError::Grammar(format!(
            "Exponent out of range: ({})^{}",
            q.1, n
        ))),
    }
}

fn separator(input: &str) -> IResult<&str, ()> {
    value((), pair(space0, opt(one_of("_*"))))(input)
}

fn operator(input: &str) -> IResult<&str, Operator> {
    alt((
        delimited(
            space0,
            alt((
                value(Operator::Multiply, char('*')),
                value(Operator::Divide, char('/')),
            )),
            space0,
        ),
        value(Operator::Multiply, many1_count(one_of(" _."))),
    ))(input)
}

fn term(input: &str) -> IResult<&str, Result<Quantity, DimError>> {
    let (input, (base, exponent)) =
        pair(alt((group, symbol)), opt(exponent))(input)?;

    Ok((
        input,
        match exponent {
            None => base,
            Some(n) => match i8::try_from(n) {
                Ok(_) => base.and_then(|q| power(q, n)),
                Err(_) => Err(DimError::Grammar(format!(
                    "Exponent out of range: {}",
                    n
                ))),
            },
        },
    ))
}

fn group(input: &str) -> IResult<&str, Result<Quantity, DimError>> {
    delimited(char('('), unit_expression, char(')'))(input)
}

fn symbol(input: &str) -> IResult<&str, Result<Quantity, DimError>> {
    let (input, word) = take_while1(is_symbol_char)(input)?;
    Ok((input, unit_literal(word)))
}

fn exponent(input: &str) -> IResult<&str, i32> {
    alt((preceded(char('^'), exponent_group), superscript_power))(input)
}

fn exponent_group(input: &str) -> IResult<&str, i32> {
    alt((
        delimited(char('('), exponent_group, char(')')),
        map_res(
            recognize(pair(opt(one_of("+-")), digit1)),
            str::parse::<i32>,
        ),
    ))(input)
}

fn superscript_power(input: &str) -> IResult<&str, i32> {
    let (input, (s, n)) =
        pair(opt(superscript_sign), superscript_digit1)(input)?;
    Ok((input, s.unwrap_or(1) * n))
}

fn superscript_sign(input: &str) -> IResult<&str, i32> {
    alt((value(-1, char('⁻')), value(1, char('⁺'))))(input)
}

fn superscript_digit1(input: &str) -> IResult<&str, i32> {
    fold_many1(
        superscript_digit,
        || 0,
        |n: i32, i| n.saturating_mul(10).saturating_add(i),
    )(input)
}

fn superscript_digit(input: &str) -> IResult<&str, i32> {
    alt((
        value(0, char('⁰')),
        value(1, char('¹')),
        value(2, char('²')),
        value(3, char('³')),
        value(4, char('⁴')),
        value(5, char('⁵')),
        value(6, char('⁶')),
        value(7, char('⁷')),
        value(8, char('⁸')),
        value(9, char('⁹')),
    ))(input)
}

/* Monomorphised versions of nom parsers. */

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}
