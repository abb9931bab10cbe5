use crate::conversion::token::Token;
use std::iter::Peekable;
use std::str::Chars;

/// Splits an input expression into tokens.
///
/// Numerals are read greedily as digits, an optional decimal point and more digits,
/// so `1.2.3` becomes the two numerals `1.2` and `.3`. Lexing never fails;
/// rejecting malformed shapes is left to the parser.
///
/// # Arguments
///
/// * `expression`: The text to split, already trimmed and lowercased.
///
/// returns: The tokens in the order they appear.
///
/// # Examples
///
/// ```
/// use unit_converter::conversion::lexer::tokenize;
/// use unit_converter::conversion::token::Token;
///
/// let tokens = tokenize("3/2lbs");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Numeral("3".to_string()),
///         Token::ForwardSlash,
///         Token::Numeral("2".to_string()),
///         Token::Word("lbs".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        let token = match character {
            '0'..='9' | '.' => Token::Numeral(read_numeral(&mut characters)),
            '/' => {
                characters.next();
                Token::ForwardSlash
            }
            letter if letter.is_ascii_alphabetic() => {
                Token::Word(read_while(&mut characters, |c| c.is_ascii_alphabetic()))
            }
            other => {
                characters.next();
                Token::Other(other)
            }
        };
        tokens.push(token);
    }

    tokens
}

fn read_numeral(characters: &mut Peekable<Chars>) -> String {
    let mut numeral = read_while(characters, |c| c.is_ascii_digit());
    if characters.next_if_eq(&'.').is_some() {
        numeral.push('.');
        numeral.push_str(&read_while(characters, |c| c.is_ascii_digit()));
    }
    numeral
}

fn read_while(characters: &mut Peekable<Chars>, predicate: impl Fn(char) -> bool) -> String {
    let mut text = String::new();
    while let Some(character) = characters.next_if(|c| predicate(*c)) {
        text.push(character);
    }
    text
}
