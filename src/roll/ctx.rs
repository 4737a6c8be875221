use super::{
    resolve,
    roller::{DefaultRoller, Roller},
    value::Value,
};
use crate::common::*;
use crate::error::{EvalError, Result};
use crate::expr::ResolvedTerm;
use crate::limits::Limits;
use crate::parse::Token;

/// The state shared by every term of an evaluation: the caps and the
/// random source.
pub struct RollContext<R = DefaultRoller> {
    limits: Limits,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(limits: Limits, roller: R) -> Self {
        Self { limits, roller }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn roller(&mut self) -> &mut R {
        &mut self.roller
    }

    pub fn roll_between(&mut self, min: Int, max: Int) -> Int {
        self.roller.roll_between(min, max)
    }

    pub fn roll(&mut self, sides: Int) -> Int {
        self.roller.roll(sides)
    }

    /// Runs a postfix token list on a value stack.
    ///
    /// The result carries the single value left on the stack together with
    /// the details and symbols of every term, in evaluation order. A check
    /// is only accepted when `is_final` is set.
    pub fn eval(&mut self, postfix: &[Token<'_>], is_final: bool) -> Result<ResolvedTerm> {
        let mut stack: Vec<Value> = Vec::with_capacity(postfix.len());
        let mut detail = String::new();
        let mut symbols = Vec::new();

        for token in postfix {
            match *token {
                Token::Term(term) => {
                    let resolved = resolve::resolve(term, self)?;
                    log::trace!("{} => {}{}", term, resolved.value, resolved.detail);
                    detail.push_str(&resolved.detail);
                    symbols.extend(resolved.symbols);
                    stack.push(resolved.value);
                }
                Token::Operator(op) => {
                    let rhs = stack.pop().ok_or(EvalError::Syntax)?;
                    let lhs = stack.pop().ok_or(EvalError::Syntax)?;
                    stack.push(lhs.combine(op, rhs)?);
                }
                Token::GroupOpen | Token::GroupClose => return Err(EvalError::Syntax),
            }
        }

        let value = match stack.as_slice() {
            [value] => *value,
            _ => return Err(EvalError::Syntax),
        };
        if !is_final && matches!(value, Value::Check(_)) {
            return Err(EvalError::Syntax);
        }
        Ok(ResolvedTerm::new(value, detail, symbols))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Limits::default(), rand::thread_rng())
    }
}
