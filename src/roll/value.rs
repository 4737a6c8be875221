use super::num::Number;
use crate::common::*;
use crate::error::{EvalError, Result};
use std::fmt;

/// The narrative dice system a [CheckVector] belongs to.
///
/// Checks from different systems never combine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CheckKind {
    /// Edge of the Empire: success, advantage, triumph, despair, light side, dark side.
    EdgeOfTheEmpire,
    /// Warhammer Fantasy Roleplay: success, boon, delay, exertion, Sigmar's Comet, Chaos Star.
    Warhammer,
}

impl CheckKind {
    /// Directory prefix of this system's symbol images.
    pub const fn symbol_prefix(&self) -> &'static str {
        match self {
            Self::EdgeOfTheEmpire => "eote",
            Self::Warhammer => "wfrp",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CheckVector {
    pub kind: CheckKind,
    pub counts: [Int; 6],
}

impl CheckVector {
    pub const fn new(kind: CheckKind, counts: [Int; 6]) -> Self {
        Self { kind, counts }
    }

    pub fn add(self, rhs: Self) -> Result<Self> {
        if self.kind != rhs.kind {
            return Err(EvalError::Syntax);
        }
        let mut counts = self.counts;
        for (a, b) in counts.iter_mut().zip(rhs.counts) {
            *a += b;
        }
        Ok(Self::new(self.kind, counts))
    }

    /// The check rendered as clauses such as `2 successes, 1 advantage`.
    pub fn summary(&self) -> String {
        let clauses = match self.kind {
            CheckKind::EdgeOfTheEmpire => self.eote_clauses(),
            CheckKind::Warhammer => self.wfrp_clauses(),
        };
        clauses.join(", ")
    }

    fn eote_clauses(&self) -> Vec<String> {
        let [success, advantage, triumph, despair, light, dark] = self.counts;
        let mut out = Vec::new();
        // A pure Force roll has no success line.
        if success != 0 || light + dark <= 0 {
            out.push(net(success, "success", "successes", "failure", "failures"));
        }
        match advantage {
            x if x < 0 => out.push(format!("{} threat", -x)),
            x if x > 0 => out.push(format!("{} advantage", x)),
            _ => {}
        }
        push_positive(&mut out, triumph, "Triumph");
        push_positive(&mut out, despair, "Despair");
        push_positive(&mut out, light, "Light Side");
        push_positive(&mut out, dark, "Dark Side");
        out
    }

    fn wfrp_clauses(&self) -> Vec<String> {
        let [success, boon, delay, exertion, comet, chaos] = self.counts;
        let mut out = vec![net(success, "success", "successes", "challenge", "challenges")];
        match boon {
            x if x < 0 => out.push(format!("{} bane", -x)),
            x if x > 0 => out.push(format!("{} boon", x)),
            _ => {}
        }
        push_positive(&mut out, delay, "delay");
        push_positive(&mut out, exertion, "exertion");
        push_positive(&mut out, comet, "Sigmar's Comet");
        push_positive(&mut out, chaos, "Chaos Star");
        out
    }
}

fn net(n: Int, one: &str, many: &str, one_neg: &str, many_neg: &str) -> String {
    match n {
        1 => format!("1 {}", one),
        -1 => format!("1 {}", one_neg),
        x if x < 0 => format!("{} {}", -x, many_neg),
        x => format!("{} {}", x, many),
    }
}

fn push_positive(out: &mut Vec<String>, n: Int, label: &str) {
    if n > 0 {
        out.push(format!("{} {}", n, label));
    }
}

impl fmt::Display for CheckVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// The value of a term, a part, or anything in between.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Numeric(Number),
    Check(CheckVector),
}

impl Value {
    /// Applies `op` to two values. Numbers support all four operators; checks
    /// of the same kind only add. Every other pairing is a syntax error.
    pub fn combine(self, op: BinaryOperator, rhs: Self) -> Result<Self> {
        use BinaryOperator::*;

        match (self, rhs) {
            (Self::Numeric(l), Self::Numeric(r)) => Ok(Self::Numeric(match op {
                Add => l + r,
                Sub => l - r,
                Mul => l * r,
                Div => l.floor_div(r)?,
            })),
            (Self::Check(l), Self::Check(r)) if op == Add => l.add(r).map(Self::Check),
            _ => Err(EvalError::Syntax),
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Numeric(x) => Some(*x),
            Self::Check(_) => None,
        }
    }

    pub fn as_check(&self) -> Option<&CheckVector> {
        match self {
            Self::Check(x) => Some(x),
            Self::Numeric(_) => None,
        }
    }
}

impl From<Number> for Value {
    fn from(x: Number) -> Self {
        Self::Numeric(x)
    }
}

impl From<Int> for Value {
    fn from(x: Int) -> Self {
        Self::Numeric(x.into())
    }
}

impl From<CheckVector> for Value {
    fn from(x: CheckVector) -> Self {
        Self::Check(x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => fmt::Display::fmt(x, f),
            Self::Check(x) => fmt::Display::fmt(x, f),
        }
    }
}
