use crate::common::BinaryOperator;
use crate::error::{EvalError, Result};
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub(crate) enum TokenKind {
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Everything between operators is left for the die-type patterns.
    #[regex(r"[^()*/+\- \t\r\n]+")]
    Term,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token<'a> {
    Operator(BinaryOperator),
    GroupOpen,
    GroupClose,
    /// An unresolved number or die term, e.g. `3d6k2`.
    Term(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::GroupOpen => f.write_str("("),
            Self::GroupClose => f.write_str(")"),
            Self::Term(s) => f.write_str(s),
        }
    }
}

/// Splits one part into operator, parenthesis and term tokens.
///
/// Whitespace only separates tokens; it never appears inside one.
pub fn tokenize(s: &str) -> Result<Vec<Token<'_>>> {
    let mut lexer = TokenKind::lexer(s);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        let token = match kind {
            TokenKind::LeftParen => Token::GroupOpen,
            TokenKind::RightParen => Token::GroupClose,
            TokenKind::Term => Token::Term(lexer.slice()),
            TokenKind::Error => return Err(EvalError::Syntax),
            op => Token::Operator(op.as_binary_op().ok_or(EvalError::Syntax)?),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Joins tokens back into text, one space between each.
pub fn join(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use BinaryOperator::*;

    fn check(s: &str, expected: Vec<Token>) {
        assert_eq!(tokenize(s).unwrap(), expected);
    }

    #[test]
    fn test_tokenize_terms() {
        check("3d6", vec![Token::Term("3d6")]);
        check("  5d10k3 ", vec![Token::Term("5d10k3")]);
        check("", vec![]);
    }

    #[test]
    fn test_tokenize_operators() {
        check(
            "1d20+1d8+4",
            vec![
                Token::Term("1d20"),
                Token::Operator(Add),
                Token::Term("1d8"),
                Token::Operator(Add),
                Token::Term("4"),
            ],
        );
        check(
            "(1d8 + 2) * 3",
            vec![
                Token::GroupOpen,
                Token::Term("1d8"),
                Token::Operator(Add),
                Token::Term("2"),
                Token::GroupClose,
                Token::Operator(Mul),
                Token::Term("3"),
            ],
        );
        check(
            "10 /2-1",
            vec![
                Token::Term("10"),
                Token::Operator(Div),
                Token::Term("2"),
                Token::Operator(Sub),
                Token::Term("1"),
            ],
        );
    }

    #[test]
    fn test_whitespace_splits_terms() {
        check("2e A", vec![Token::Term("2e"), Token::Term("A")]);
    }

    #[test]
    fn test_join() {
        let tokens = tokenize("(1+2)*3").unwrap();
        assert_eq!(join(&tokens), "( 1 + 2 ) * 3");
    }

    proptest! {
        #[test]
        fn prop_tokenize_join_idempotent(s in "[0-9dkxeF()*/+ \\-]{0,40}") {
            let tokens = tokenize(&s).unwrap();
            let joined = join(&tokens);
            prop_assert_eq!(tokenize(&joined).unwrap(), tokens);
        }
    }
}
