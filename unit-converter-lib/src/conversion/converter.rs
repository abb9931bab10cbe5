use crate::conversion::unit::Unit;

/// Converted values are rounded to five decimal places.
const ROUNDING_SCALE: f64 = 100_000.0;

/// The unit a value in `unit` gets converted into.
pub fn paired_unit(unit: Unit) -> Unit {
    unit.paired()
}

/// The spelled-out name of `unit`, e.g. `kilograms` for `kg`.
pub fn display_name(unit: Unit) -> &'static str {
    unit.display_name()
}

/// Converts a value from the given unit into its paired unit.
///
/// # Arguments
///
/// * `value`: The quantity to convert.
/// * `unit`: The unit `value` is expressed in.
///
/// returns: The quantity in the paired unit, rounded to five decimal places.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::converter::convert;
/// use unit_converter::conversion::unit::Unit;
///
/// assert_eq!(convert(25.0, Unit::Mile), 40.2335);
/// ```
pub fn convert(value: f64, unit: Unit) -> f64 {
    round(value * unit.factor())
}

/// Scale, round half away from zero, and scale back.
fn round(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE
}
