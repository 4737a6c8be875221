//! Term resolution: one strategy per die-type grammar.
//!
//! Each strategy owns the compiled pattern for the terms it understands. The
//! registry tries them in order and hands the first match its captures.

mod combinatoric;
mod constant;
mod draw;
mod exploding;
mod narrative;
mod standard;

use super::{ctx::RollContext, roller::Roller, value::CheckKind};
use crate::common::Int;
use crate::error::{EvalError, Result};
use crate::expr::ResolvedTerm;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub use combinatoric::Combinatoric;
pub use constant::Constant;
pub use draw::{Mana, Runes, Tokyo};
pub use exploding::DoubleCross;
pub use narrative::Narrative;
pub use standard::Standard;

#[enum_dispatch::enum_dispatch]
pub trait Resolve {
    fn pattern(&self) -> &Regex;

    /// Resolves a term already matched by [Resolve::pattern]. Caps are
    /// checked before the first draw.
    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm>;
}

#[enum_dispatch::enum_dispatch(Resolve)]
pub enum DieType {
    Constant(Constant),
    Combinatoric(Combinatoric),
    Narrative(Narrative),
    DoubleCross(DoubleCross),
    Mana(Mana),
    Tokyo(Tokyo),
    Runes(Runes),
    Standard(Standard),
}

static REGISTRY: Lazy<Vec<DieType>> = Lazy::new(|| {
    vec![
        Constant::new().into(),
        Combinatoric::new().into(),
        Narrative::new(CheckKind::EdgeOfTheEmpire).into(),
        Narrative::new(CheckKind::Warhammer).into(),
        DoubleCross::new().into(),
        Mana::new().into(),
        Tokyo::new().into(),
        Runes::new().into(),
        Standard::new().into(),
    ]
});

/// Resolves one term against the first die type whose grammar matches it.
pub fn resolve<R: Roller>(term: &str, ctx: &mut RollContext<R>) -> Result<ResolvedTerm> {
    for die in REGISTRY.iter() {
        if let Some(caps) = die.pattern().captures(term) {
            return die.resolve(term, &caps, ctx);
        }
    }
    log::trace!("no die type matches {:?}", term);
    Err(EvalError::Syntax)
}

/// `[a, b, c]`
fn bracketed(items: &[Int]) -> String {
    let items = items.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid die pattern {}: {}", pattern, e))
}
