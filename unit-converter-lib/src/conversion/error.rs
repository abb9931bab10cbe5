use std::error;
use std::fmt;
use std::fmt::Formatter;

/// The ways an input expression can be rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InputError {
    /// Malformed numeric literal, malformed fraction or a zero denominator.
    InvalidNumber,
    /// Unit token outside of the supported set.
    InvalidUnit,
    /// Both of the above at once.
    InvalidNumberAndUnit,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidNumber => write!(f, "invalid number"),
            InputError::InvalidUnit => write!(f, "invalid unit"),
            InputError::InvalidNumberAndUnit => write!(f, "invalid number and unit"),
        }
    }
}

impl error::Error for InputError {}
