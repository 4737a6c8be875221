//! Evaluation of tabletop dice notation such as `3d6+2`, `4#1d20+1d8+4`,
//! `2eA+1eD` or `5d10k3`.
//!
//! ```
//! use orokos_dice::{evaluate, Limits};
//!
//! let results = evaluate("(1+2)*3", &Limits::default()).unwrap();
//! assert_eq!(results[0].final_part().total().as_int(), 9);
//! ```

pub mod common;
mod error;
mod eval;
mod expr;
mod limits;
pub mod parse;
pub mod roll;

pub use error::{EvalError, Result};
pub use eval::{evaluate, evaluate_with};
pub use expr::{ExpressionResult, PartResult, ResolvedTerm};
pub use limits::Limits;
pub use roll::{MarkdownStringifier, SimpleStringifier, Stringify};

/// Every symbol identifier of `results`, in order.
pub fn symbols(results: &[ExpressionResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(ExpressionResult::symbols)
        .map(str::to_string)
        .collect()
}

/// The markdown rendering of `results` together with their symbols.
pub fn render(results: &[ExpressionResult]) -> (String, Vec<String>) {
    (MarkdownStringifier::new().stringify(results), symbols(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::ScriptedRoller;

    #[test]
    fn test_render() {
        // A 4 = S/S, then S 5 = Th
        let results = evaluate_with("1eA+1eS; 1d1", &Limits::default(), ScriptedRoller::new([4, 5])).unwrap();
        let (text, symbols) = render(&results);
        assert_eq!(
            text,
            "__1eA+1eS__: **2 successes, 1 threat** [1eA=S/S] [1eS=Th]\n__1d1__: **1** [1d1=1]"
        );
        assert_eq!(symbols, vec!["eote/a-s-s.png", "eote/s-th.png"]);
    }
}
