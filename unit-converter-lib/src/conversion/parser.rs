use crate::conversion::error::InputError;
use crate::conversion::lexer;
use crate::conversion::token::Token;
use crate::conversion::unit::Unit;
use log::trace;

/// The quantity assumed when an expression starts directly with its unit.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Reads the quantity at the start of an expression.
///
/// A fraction (`3/2`) takes precedence over a decimal (`10.5`, `.5`), and an
/// expression without any number defaults to one. So does a fraction missing
/// its numerator or denominator, such as `/2` or `3/`. Whatever follows the number
/// may not contain digits, decimal points or fraction bars.
///
/// # Arguments
///
/// * `input`: The raw expression, e.g. `3/2lbs`.
///
/// returns: The quantity, or [`InputError::InvalidNumber`] if it is malformed
/// or divides by zero.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::parser::parse_number;
///
/// assert_eq!(parse_number("3/2lbs"), Ok(1.5));
/// assert_eq!(parse_number("gal"), Ok(1.0));
/// assert!(parse_number("3/2/3").is_err());
/// ```
pub fn parse_number(input: &str) -> Result<f64, InputError> {
    let tokens = tokenize_normalized(input);
    let split_at = tokens
        .iter()
        .position(|token| !token.is_numeric())
        .unwrap_or(tokens.len());
    let (number, rest) = tokens.split_at(split_at);

    if rest.iter().any(Token::is_numeric) {
        return Err(InputError::InvalidNumber);
    }

    match number {
        [Token::Numeral(numerator), Token::ForwardSlash, Token::Numeral(denominator)] => {
            let numerator = parse_numeral(numerator)?;
            let denominator = parse_numeral(denominator)?;
            if denominator == 0.0 {
                return Err(InputError::InvalidNumber);
            }
            Ok(numerator / denominator)
        }
        [Token::ForwardSlash]
        | [Token::ForwardSlash, Token::Numeral(_)]
        | [Token::Numeral(_), Token::ForwardSlash] => Ok(DEFAULT_QUANTITY),
        [Token::Numeral(decimal)] => parse_numeral(decimal),
        [] => Ok(DEFAULT_QUANTITY),
        _ => Err(InputError::InvalidNumber),
    }
}

/// Reads the unit at the end of an expression.
///
/// # Arguments
///
/// * `input`: The raw expression, e.g. `10L`.
///
/// returns: The unit named by the trailing letters, or [`InputError::InvalidUnit`]
/// if they do not name a supported unit.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::parser::parse_unit;
/// use unit_converter::conversion::unit::Unit;
///
/// assert_eq!(parse_unit("10L"), Ok(Unit::Liter));
/// assert!(parse_unit("3/2/3").is_err());
/// ```
pub fn parse_unit(input: &str) -> Result<Unit, InputError> {
    match tokenize_normalized(input).last() {
        Some(Token::Word(word)) => word.parse::<Unit>(),
        _ => Err(InputError::InvalidUnit),
    }
}

fn tokenize_normalized(input: &str) -> Vec<Token> {
    let normalized = input.trim().to_lowercase();
    let tokens = lexer::tokenize(&normalized);
    trace!("Tokenized {:?} into {:?}", input, tokens);
    tokens
}

fn parse_numeral(numeral: &str) -> Result<f64, InputError> {
    // A lone "." is the only numeral the lexer can produce that is not a valid float.
    numeral
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    input = {
    "10kg",
    "10.5gal",
    "0.5km",
    "3/2lbs",
    ".5mi",
    "5.L",
    "1.5/0.5gal",
    "  4KM  ",
    "7 lbs",
    },
    expected_number = {
    10.0,
    10.5,
    0.5,
    1.5,
    0.5,
    5.0,
    3.0,
    4.0,
    7.0,
    }
    )]
    fn valid_number_is_read(input: &str, expected_number: f64) {
        assert_eq!(parse_number(input), Ok(expected_number));
    }

    #[parameterized(
    input = { "", "kg", "  L", "kilomegagram", "/2kg", "3/kg", "/kg", "0/mi", "/0km" }
    )]
    fn missing_number_defaults_to_one(input: &str) {
        assert_eq!(parse_number(input), Ok(DEFAULT_QUANTITY));
    }

    #[parameterized(
    input = {
    "3/2/3",
    "3/2/3kg",
    "1.2.3mi",
    "3/0lbs",
    "0/0gal",
    "3/0.0km",
    ".kg",
    "kg5",
    "10kg5",
    "-5kg",
    "1 0kg",
    }
    )]
    fn malformed_number_is_invalid(input: &str) {
        assert_eq!(parse_number(input), Err(InputError::InvalidNumber));
    }

    #[test]
    fn invalid_unit_does_not_affect_number() {
        assert_eq!(parse_number("32g"), Ok(32.0));
    }

    #[parameterized(
    input = { "10kg", "3/2lbs", "5mi", "5KM", "gal", "10L", "10l", "2.5 Gal " },
    expected_unit = {
    Unit::Kilogram,
    Unit::Pound,
    Unit::Mile,
    Unit::Kilometer,
    Unit::Gallon,
    Unit::Liter,
    Unit::Liter,
    Unit::Gallon,
    }
    )]
    fn valid_unit_is_read(input: &str, expected_unit: Unit) {
        assert_eq!(parse_unit(input), Ok(expected_unit));
    }

    #[test]
    fn liter_is_returned_capitalized() {
        assert_eq!(parse_unit("10l").unwrap().to_string(), "L");
    }

    #[parameterized(input = { "3/2/3", "", "10", "32g", "10kilograms", "5kg3", "10 lbs!" })]
    fn unrecognized_unit_is_invalid(input: &str) {
        assert_eq!(parse_unit(input), Err(InputError::InvalidUnit));
    }
}
