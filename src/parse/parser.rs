use super::lexer::Token;
use crate::error::{EvalError, Result};

/// Converts infix tokens to postfix order (shunting-yard).
///
/// `*` and `/` bind tighter than `+` and `-`; operators of equal precedence
/// associate to the left.
pub fn to_postfix<'a>(tokens: &[Token<'a>]) -> Result<Vec<Token<'a>>> {
    let mut stack: Vec<Token<'a>> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for &token in tokens {
        match token {
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
            Token::GroupOpen => stack.push(token),
            Token::GroupClose => loop {
                match stack.pop() {
                    Some(Token::GroupOpen) => break,
                    Some(op) => output.push(op),
                    None => return Err(EvalError::Syntax),
                }
            },
            Token::Term(_) => output.push(token),
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::GroupOpen {
            return Err(EvalError::Syntax);
        }
        output.push(token);
    }

    Ok(output)
}
