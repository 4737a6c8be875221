use crate::error::EvalError;
use std::fmt::{self, Write};
use std::str::FromStr;
pub use vec1::vec1;

pub type Int = i64;

pub type Float = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Parses a run of ASCII digits that a term pattern has already matched.
///
/// Counts too large for [Int] saturate, so that the caller's limit check
/// rejects them instead of reporting a syntax error.
pub(crate) fn parse_count(s: &str) -> Int {
    s.parse().unwrap_or(Int::MAX)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sides {
    Poly(Int),
    Fudge,
    Chase,
}

impl Sides {
    /// Lowest and highest face.
    pub const fn faces(&self) -> (Int, Int) {
        match self {
            Self::Poly(x) => (1, *x),
            Self::Fudge => (-1, 1),
            Self::Chase => (1, 10),
        }
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly(x) => fmt::Display::fmt(x, f),
            Self::Fudge => f.write_char('F'),
            Self::Chase => f.write_char('C'),
        }
    }
}

impl FromStr for Sides {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Self::Fudge),
            "C" => Ok(Self::Chase),
            _ if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                match parse_count(s) {
                    0 => Err(EvalError::Syntax),
                    x => Ok(Self::Poly(x)),
                }
            }
            _ => Err(EvalError::Syntax),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub const fn as_char(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_from_str() {
        assert_eq!("20".parse::<Sides>(), Ok(Sides::Poly(20)));
        assert_eq!("F".parse::<Sides>(), Ok(Sides::Fudge));
        assert_eq!("C".parse::<Sides>(), Ok(Sides::Chase));
        assert_eq!("0".parse::<Sides>(), Err(EvalError::Syntax));
        assert_eq!("x".parse::<Sides>(), Err(EvalError::Syntax));
        assert_eq!(
            "99999999999999999999999".parse::<Sides>(),
            Ok(Sides::Poly(Int::MAX))
        );
    }

    #[test]
    fn test_precedence() {
        assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
        assert_eq!(
            BinaryOperator::Add.precedence(),
            BinaryOperator::Sub.precedence()
        );
        assert_eq!(
            BinaryOperator::Mul.precedence(),
            BinaryOperator::Div.precedence()
        );
    }
}
