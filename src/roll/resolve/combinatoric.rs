use super::*;
use crate::common::*;
use crate::roll::Number;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// `NcK` (combinations) and `NpK` (permutations) of K items out of N.
pub struct Combinatoric {
    pattern: Regex,
}

impl Combinatoric {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^([0-9]+)(c|p)([0-9]+)$"),
        }
    }
}

/// `from * (from + 1) * ... * to`, or one for an empty range.
fn product(from: Int, to: Int) -> BigUint {
    (from.max(1)..=to).fold(BigUint::one(), |acc, x| acc * BigUint::from(x as u64))
}

fn to_number(x: &BigUint) -> Number {
    match x.to_i64() {
        Some(x) => Number::Int(x),
        None => Number::Float(x.to_f64().unwrap_or(Float::INFINITY)),
    }
}

impl Resolve for Combinatoric {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let n = parse_count(&caps[1]);
        let k = parse_count(&caps[3]);
        let ordered = &caps[2] == "p";
        ctx.limits().check_combinatoric(n)?;
        if k > n {
            return Err(EvalError::Syntax);
        }

        let permutations = product(n - k + 1, n);
        let value = if ordered {
            permutations
        } else {
            permutations / product(1, k)
        };

        let mut picks: Vec<Int> = (1..=n).collect();
        ctx.roller().partial_shuffle(&mut picks, k as usize);
        picks.truncate(k as usize);
        if !ordered {
            picks.sort_unstable();
        }

        Ok(ResolvedTerm::itemized(to_number(&value), term, picks, Vec::new()))
    }
}
