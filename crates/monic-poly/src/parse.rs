//! Parsing of polynomial expressions in the variable `x`.
//!
//! Input is lexed into tokens and then consumed by a recursive-descent
//! parser for the grammar
//!
//! ```text
//! polynomial := sign? term (sign term)*
//! term       := number (var exponent?)? | var exponent?
//! exponent   := '^' '-'? number
//! sign       := '+' | '-'
//! ```
//!
//! Exponents must be non-negative integers; anything else is rejected
//! with a typed error rather than silently repaired.

use std::str::FromStr;

use thiserror::Error;

use crate::poly::Polynomial;
use crate::term::Term;

/// Errors produced while parsing a polynomial expression.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("empty input")]
    Empty,
    /// A character that belongs to no token.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// A letter other than the variable `x`.
    #[error("unknown variable '{0}', expected 'x'")]
    WrongVariable(char),
    /// A numeric literal that failed to parse, such as `1.2.3`.
    #[error("malformed number \"{0}\"")]
    MalformedNumber(String),
    /// The input ended where a term or exponent was still expected.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A sign or `^` appeared where a term had to start.
    #[error("expected a term")]
    ExpectedTerm,
    /// Two terms without a `+` or `-` between them.
    #[error("expected '+' or '-' between terms")]
    ExpectedSign,
    /// Something other than a number followed `^`.
    #[error("expected a numeric exponent after '^'")]
    ExpectedExponent,
    /// An exponent that is not a non-negative integer.
    #[error("exponent {0} is not a non-negative integer")]
    InvalidExponent(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Var,
    Caret,
    Plus,
    Minus,
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            'x' => {
                chars.next();
                tokens.push(Token::Var);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut text = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        text.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = match text.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => return Err(ParseError::MalformedNumber(text)),
                };
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() => return Err(ParseError::WrongVariable(c)),
            _ => return Err(ParseError::UnexpectedChar(c)),
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn polynomial(mut self) -> Result<Polynomial, ParseError> {
        let mut terms = Vec::new();
        let mut sign = self.leading_sign();
        loop {
            let term = self.term()?;
            terms.push(Term::new(sign * term.coeff, term.exp));
            match self.next() {
                None => break,
                Some(Token::Plus) => sign = 1.0,
                Some(Token::Minus) => sign = -1.0,
                Some(_) => return Err(ParseError::ExpectedSign),
            }
        }
        Ok(Polynomial::new(terms))
    }

    fn leading_sign(&mut self) -> f64 {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                -1.0
            }
            Some(Token::Plus) => {
                self.pos += 1;
                1.0
            }
            _ => 1.0,
        }
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        match self.next() {
            None => Err(ParseError::UnexpectedEnd),
            Some(Token::Number(n)) => {
                if self.peek() == Some(Token::Var) {
                    self.pos += 1;
                    Ok(Term::new(n, self.exponent()?))
                } else {
                    Ok(Term::constant(n))
                }
            }
            Some(Token::Var) => Ok(Term::new(1.0, self.exponent()?)),
            Some(Token::Plus | Token::Minus | Token::Caret) => Err(ParseError::ExpectedTerm),
        }
    }

    /// Parses an optional `^ exponent` suffix; a bare variable is degree 1.
    fn exponent(&mut self) -> Result<u32, ParseError> {
        if self.peek() != Some(Token::Caret) {
            return Ok(1);
        }
        self.pos += 1;
        let negated = self.peek() == Some(Token::Minus);
        if negated {
            self.pos += 1;
        }
        match self.next() {
            None => Err(ParseError::UnexpectedEnd),
            Some(Token::Number(n)) => {
                let value = if negated { -n } else { n };
                if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
                    Ok(value as u32)
                } else {
                    Err(ParseError::InvalidExponent(value))
                }
            }
            Some(_) => Err(ParseError::ExpectedExponent),
        }
    }
}

/// Parses an expression such as `"3x^2 - 2x + 1"` into a canonical
/// [`Polynomial`].
///
/// # Errors
///
/// A [`ParseError`] describing the first offending token or character.
pub fn parse(input: &str) -> Result<Polynomial, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    Parser { tokens: &tokens, pos: 0 }.polynomial()
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_coeffs(coeffs)
    }

    #[test]
    fn test_parse_standard_forms() {
        assert_eq!(parse("x^2 - 2x + 1").unwrap(), poly(&[1.0, -2.0, 1.0]));
        assert_eq!(parse("3x^2-2x+1").unwrap(), poly(&[3.0, -2.0, 1.0]));
        assert_eq!(parse("x").unwrap(), Polynomial::x());
        assert_eq!(parse("-x^3").unwrap(), Polynomial::monomial(-1.0, 3));
        assert_eq!(parse("42").unwrap(), Polynomial::constant(42.0));
        assert_eq!(parse("+2x").unwrap(), Polynomial::monomial(2.0, 1));
        assert_eq!(parse("2.5x^2 + .5").unwrap(), {
            let mut p = Polynomial::monomial(2.5, 2);
            p = p.add(&Polynomial::constant(0.5));
            p
        });
    }

    #[test]
    fn test_parse_merges_like_terms() {
        // Out-of-order and duplicated exponents still canonicalize.
        assert_eq!(parse("2x + x^2 + 3x").unwrap(), poly(&[1.0, 5.0, 0.0]));
    }

    #[test]
    fn test_parse_explicit_degree_one_and_zero() {
        assert_eq!(parse("x^1").unwrap(), Polynomial::x());
        assert_eq!(parse("5x^0").unwrap(), Polynomial::constant(5.0));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_wrong_variable() {
        assert_eq!(parse("3y + 1"), Err(ParseError::WrongVariable('y')));
    }

    #[test]
    fn test_parse_unexpected_char() {
        assert_eq!(parse("x*2"), Err(ParseError::UnexpectedChar('*')));
    }

    #[test]
    fn test_parse_malformed_number() {
        assert_eq!(
            parse("1.2.3x"),
            Err(ParseError::MalformedNumber("1.2.3".into()))
        );
    }

    #[test]
    fn test_parse_trailing_sign() {
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("x^"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(parse("2 3"), Err(ParseError::ExpectedSign));
        assert_eq!(parse("x x"), Err(ParseError::ExpectedSign));
    }

    #[test]
    fn test_parse_doubled_sign() {
        assert_eq!(parse("x + + 1"), Err(ParseError::ExpectedTerm));
    }

    #[test]
    fn test_parse_exponent_errors() {
        assert_eq!(parse("x^-2"), Err(ParseError::InvalidExponent(-2.0)));
        assert_eq!(parse("x^2.5"), Err(ParseError::InvalidExponent(2.5)));
        assert_eq!(parse("x^x"), Err(ParseError::ExpectedExponent));
    }

    #[test]
    fn test_format_parse_round_trip() {
        let p = poly(&[3.0, 0.0, -2.5, 1.0]);
        assert_eq!(p.to_string().parse::<Polynomial>().unwrap(), p);
        let q = Polynomial::zero();
        assert_eq!(q.to_string().parse::<Polynomial>().unwrap(), q);
    }
}
