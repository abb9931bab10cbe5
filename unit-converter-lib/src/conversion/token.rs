use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an input expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Digits with at most one decimal point, e.g. `10`, `.5` or `5.`.
    Numeral(String),
    ForwardSlash,
    /// A run of ASCII letters.
    Word(String),
    /// Any other single character, e.g. whitespace or punctuation.
    Other(char),
}

impl Token {
    /// Whether the token can be part of a number, i.e. a numeral or a fraction bar.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Token::Numeral(_) | Token::ForwardSlash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Numeral(text) | Token::Word(text) => write!(f, "{}", text),
            Token::ForwardSlash => write!(f, "/"),
            Token::Other(character) => write!(f, "{}", character),
        }
    }
}
