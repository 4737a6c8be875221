pub mod lexer;
pub mod parser;

use crate::error::Result;
use crate::limits::Limits;

pub use lexer::{tokenize, Token};
pub use parser::to_postfix;

/// Tokenizes one part and converts it to postfix order, enforcing the token cap.
pub fn parse<'a>(part: &'a str, limits: &Limits) -> Result<Vec<Token<'a>>> {
    let tokens = tokenize(part)?;
    limits.check_tokens(tokens.len())?;
    to_postfix(&tokens)
}
