use super::*;
use crate::common::*;
use crate::roll::Number;

/// A bare integer literal.
pub struct Constant {
    pattern: Regex,
}

impl Constant {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^[0-9]+$"),
        }
    }
}

impl Resolve for Constant {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        _caps: &Captures<'_>,
        _ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        // Literals too wide for an integer are still numbers.
        let value = match term.parse::<Int>() {
            Ok(x) => Number::Int(x),
            Err(_) => Number::Float(term.parse().map_err(|_| EvalError::Syntax)?),
        };
        Ok(ResolvedTerm::plain(value))
    }
}
