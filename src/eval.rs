use crate::common::*;
use crate::error::{EvalError, Result};
use crate::expr::{ExpressionResult, PartResult, ResolvedTerm};
use crate::limits::Limits;
use crate::parse;
use crate::roll::{RollContext, Roller};
use once_cell::sync::Lazy;
use regex::Regex;

static OPERATOR_SPACING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]*([;()*/+\-])[ \t]*").unwrap_or_else(|e| panic!("invalid spacing pattern: {}", e))
});

/// Removes whitespace around `;`, parentheses and operators.
fn normalize(input: &str) -> String {
    OPERATOR_SPACING.replace_all(input.trim(), "$1").into_owned()
}

/// Evaluates every `;`-separated expression of `input` using the thread-local
/// random generator.
pub fn evaluate(input: &str, limits: &Limits) -> Result<Vec<ExpressionResult>> {
    evaluate_with(input, limits, rand::thread_rng())
}

/// Evaluates every `;`-separated expression of `input`, drawing from `roller`.
///
/// The first error aborts the whole input.
pub fn evaluate_with<R: Roller>(input: &str, limits: &Limits, roller: R) -> Result<Vec<ExpressionResult>> {
    let input = normalize(input);
    let expressions: Vec<&str> = input.split(';').collect();
    limits.check_expressions(expressions.len())?;
    log::debug!("evaluating {} expression(s): {:?}", expressions.len(), input);

    let mut ctx = RollContext::new(*limits, roller);
    expressions
        .into_iter()
        .map(|expr| eval_expression(expr, &mut ctx))
        .collect()
}

fn eval_expression<R: Roller>(expr: &str, ctx: &mut RollContext<R>) -> Result<ExpressionResult> {
    let parts: Vec<&str> = expr.split('#').collect();
    ctx.limits().check_parts(parts.len())?;

    let last = parts.len() - 1;
    let mut repeat: Int = 1;
    let mut results = Vec::with_capacity(parts.len());
    for (i, &part) in parts.iter().enumerate() {
        ctx.limits().check_repeat(repeat)?;
        let result = eval_part(part, repeat, i == last, ctx)?;
        repeat = result.total().as_int();
        results.push(result);
    }

    Ok(ExpressionResult {
        source_text: expr.trim().to_string(),
        parts: NonEmpty::try_from_vec(results).map_err(|_| EvalError::Syntax)?,
    })
}

fn eval_part<R: Roller>(
    part: &str,
    repeat: Int,
    is_final: bool,
    ctx: &mut RollContext<R>,
) -> Result<PartResult> {
    if repeat < 1 {
        log::debug!("part {:?} would run {} times", part, repeat);
        return Err(EvalError::Syntax);
    }
    let postfix = parse::parse(part, ctx.limits())?;

    let terms = (0..repeat)
        .map(|time| -> Result<ResolvedTerm> {
            let term = ctx.eval(&postfix, is_final)?;
            log::trace!("{} #{}: {}{}", part, time + 1, term.value, term.detail);
            Ok(term)
        })
        .collect::<Result<Vec<ResolvedTerm>>>()?;

    Ok(PartResult {
        source_text: part.trim().to_string(),
        resolved_terms: NonEmpty::try_from_vec(terms).map_err(|_| EvalError::Syntax)?,
    })
}
