use crate::conversion::error::InputError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Liters in one US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;
/// Kilograms in one pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.453592;
/// Kilometers in one mile.
pub const KILOMETERS_PER_MILE: f64 = 1.60934;

/// A supported unit of measure. Every unit belongs to exactly one conversion pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Kilogram,
    Pound,
    Mile,
    Kilometer,
    Gallon,
    Liter,
}

pub static UNITS: [Unit; 6] = [
    Unit::Kilogram,
    Unit::Pound,
    Unit::Mile,
    Unit::Kilometer,
    Unit::Gallon,
    Unit::Liter,
];

impl Unit {
    /// The canonical short code, e.g. `kg` or `L`.
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Pound => "lbs",
            Unit::Mile => "mi",
            Unit::Kilometer => "km",
            Unit::Gallon => "gal",
            Unit::Liter => "L",
        }
    }

    /// The spelled-out, plural name of the unit.
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kilograms",
            Unit::Pound => "pounds",
            Unit::Mile => "miles",
            Unit::Kilometer => "kilometers",
            Unit::Gallon => "gallons",
            Unit::Liter => "liters",
        }
    }

    /// The unit on the other side of this unit's conversion pair.
    pub fn paired(&self) -> Unit {
        match self {
            Unit::Kilogram => Unit::Pound,
            Unit::Pound => Unit::Kilogram,
            Unit::Mile => Unit::Kilometer,
            Unit::Kilometer => Unit::Mile,
            Unit::Gallon => Unit::Liter,
            Unit::Liter => Unit::Gallon,
        }
    }

    /// What a value in this unit is multiplied by to express it in the paired unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Gallon => LITERS_PER_GALLON,
            Unit::Liter => 1.0 / LITERS_PER_GALLON,
            Unit::Pound => KILOGRAMS_PER_POUND,
            Unit::Kilogram => 1.0 / KILOGRAMS_PER_POUND,
            Unit::Mile => KILOMETERS_PER_MILE,
            Unit::Kilometer => 1.0 / KILOMETERS_PER_MILE,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl str::FromStr for Unit {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Unit, Self::Err> {
        UNITS
            .iter()
            .find(|unit| unit.code().eq_ignore_ascii_case(input))
            .copied()
            .ok_or(InputError::InvalidUnit)
    }
}
