pub mod converter;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod unit;

pub use crate::conversion::converter::{convert, display_name, paired_unit};
pub use crate::conversion::error::InputError;
pub use crate::conversion::parser::{parse_number, parse_unit};
pub use crate::conversion::unit::Unit;

use anyhow::Result;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// The outcome of converting a single input expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub initial_value: f64,
    pub initial_unit: Unit,
    pub converted_value: f64,
    pub converted_unit: Unit,
    /// A sentence describing the conversion, see [`format_conversion`].
    pub description: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Converts a textual quantity such as `3/2lbs` into its paired unit.
///
/// # Arguments
///
/// * `input`: A number (decimal, fraction or nothing at all) followed by a unit code.
///
/// returns: The parsed and converted quantities. Fails with an [`InputError`]
/// describing every part of the input that could not be read.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::convert_expression;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let conversion = convert_expression("25mi")?;
/// assert_eq!(conversion.description, "25 miles converts to 40.2335 kilometers");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert_expression(input: &str) -> Result<Conversion> {
    let (initial_value, initial_unit) = match (parse_number(input), parse_unit(input)) {
        (Ok(value), Ok(unit)) => (value, unit),
        (Err(_), Err(_)) => return Err(InputError::InvalidNumberAndUnit.into()),
        (Err(error), _) | (_, Err(error)) => return Err(error.into()),
    };
    debug!("Read {:?} as {} {}", input, initial_value, initial_unit);

    let converted_unit = paired_unit(initial_unit);
    let converted_value = convert(initial_value, initial_unit);
    debug!("Converted to {} {}", converted_value, converted_unit);

    let description =
        format_conversion(initial_value, initial_unit, converted_value, converted_unit);

    Ok(Conversion {
        initial_value,
        initial_unit,
        converted_value,
        converted_unit,
        description,
    })
}

/// Describes a conversion in words, e.g. `25 miles converts to 40.2335 kilometers`.
///
/// The values are printed as given; round them beforehand if needed. Numbers use the
/// shortest decimal form that reads back to the same `f64`, never exponent notation.
///
/// # Arguments
///
/// * `value`: The original quantity.
/// * `unit`: The unit of the original quantity.
/// * `converted_value`: The quantity after conversion.
/// * `converted_unit`: The unit of the converted quantity.
///
/// returns: The sentence describing the conversion.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::format_conversion;
/// use unit_converter::conversion::unit::Unit;
///
/// let sentence = format_conversion(1.5, Unit::Pound, 0.68039, Unit::Kilogram);
/// assert_eq!(sentence, "1.5 pounds converts to 0.68039 kilograms");
/// ```
pub fn format_conversion(
    value: f64,
    unit: Unit,
    converted_value: f64,
    converted_unit: Unit,
) -> String {
    format!(
        "{} {} converts to {} {}",
        value,
        display_name(unit),
        converted_value,
        display_name(converted_unit)
    )
}

#[cfg(test)]
mod conversion_tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn input_error(input: &str) -> InputError {
        let error = convert_expression(input).unwrap_err();
        *error.downcast_ref::<InputError>().unwrap()
    }

    #[test]
    fn miles_are_converted_to_kilometers_end_to_end() {
        let conversion = convert_expression("25mi").unwrap();

        pretty_assertions::assert_eq!(
            conversion,
            Conversion {
                initial_value: 25.0,
                initial_unit: Unit::Mile,
                converted_value: 40.2335,
                converted_unit: Unit::Kilometer,
                description: "25 miles converts to 40.2335 kilometers".to_string(),
            }
        );
    }

    #[parameterized(
    input = {
    "3/2lbs",
    "10L",
    "gal",
    "5km",
    "100 KG",
    },
    expected_description = {
    "1.5 pounds converts to 0.68039 kilograms",
    "10 liters converts to 2.64172 gallons",
    "1 gallons converts to 3.78541 liters",
    "5 kilometers converts to 3.10686 miles",
    "100 kilograms converts to 220.46244 pounds",
    }
    )]
    fn input_is_described_in_words(input: &str, expected_description: &str) {
        let conversion = convert_expression(input).unwrap();
        assert_eq!(conversion.to_string(), expected_description);
    }

    #[test]
    fn format_conversion_does_not_round() {
        let sentence = format_conversion(1.0, Unit::Liter, 0.26417217685798894, Unit::Gallon);
        pretty_assertions::assert_eq!(
            sentence,
            "1 liters converts to 0.26417217685798894 gallons"
        );
    }

    #[test]
    fn tiny_values_are_written_out_in_full() {
        let sentence = format_conversion(0.0000001, Unit::Kilogram, 0.0, Unit::Pound);
        pretty_assertions::assert_eq!(sentence, "0.0000001 kilograms converts to 0 pounds");
    }

    #[test]
    fn fraction_with_empty_side_converts_one_unit() {
        let conversion = convert_expression("/2kg").unwrap();
        pretty_assertions::assert_eq!(
            conversion.description,
            "1 kilograms converts to 2.20462 pounds"
        );
    }

    #[test]
    fn invalid_number_is_reported() {
        assert_eq!(input_error("3/2/3kg"), InputError::InvalidNumber);
    }

    #[test]
    fn invalid_unit_is_reported() {
        assert_eq!(input_error("32g"), InputError::InvalidUnit);
    }

    #[test]
    fn invalid_number_and_unit_are_reported_together() {
        assert_eq!(
            input_error("3/7.2/4kilomegagram"),
            InputError::InvalidNumberAndUnit
        );
    }

    #[test]
    fn zero_denominator_is_invalid_number() {
        assert_eq!(input_error("1/0mi"), InputError::InvalidNumber);
    }
}
