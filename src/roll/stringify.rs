use crate::expr::{ExpressionResult, PartResult, ResolvedTerm};
use crate::roll::Value;

/// Renders evaluation results as text, one line per expression.
///
/// Final parts show every repetition as its result followed by its details.
/// Earlier parts only decide how often the next part runs, so they show the
/// total followed by their details.
pub trait Stringify {
    fn stringify(&mut self, results: &[ExpressionResult]) -> String {
        results
            .iter()
            .map(|expr| self.str_expression(expr))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn str_expression(&mut self, expr: &ExpressionResult) -> String {
        let last = expr.parts.len() - 1;
        let parts = expr
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                if i == last {
                    self.str_final_part(part)
                } else {
                    self.str_repeat_part(part)
                }
            })
            .collect::<Vec<_>>()
            .join(" # ");
        format!("{}: {}", self.str_source(&expr.source_text), parts)
    }

    fn str_source(&mut self, source: &str) -> String {
        source.to_string()
    }

    fn str_final_part(&mut self, part: &PartResult) -> String {
        part.resolved_terms
            .iter()
            .map(|term| self.str_term(term))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn str_repeat_part(&mut self, part: &PartResult) -> String {
        let mut out = vec![part.total().to_string()];
        out.extend(
            part.resolved_terms
                .iter()
                .filter(|term| !term.detail.is_empty())
                .map(|term| term.detail.trim().to_string()),
        );
        out.join(" ")
    }

    fn str_term(&mut self, term: &ResolvedTerm) -> String {
        format!("{}{}", self.str_value(&term.value), term.detail)
    }

    fn str_value(&mut self, value: &Value) -> String {
        value.to_string()
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for MarkdownStringifier {
    fn str_source(&mut self, source: &str) -> String {
        format!("__{}__", source)
    }

    fn str_value(&mut self, value: &Value) -> String {
        format!("**{}**", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;
    use crate::roll::roller::{ScriptedRoller, StepRoller};

    macro_rules! check {
        ($cls:ident, $input:expr, $expected:expr) => {
            let roller = StepRoller::new(1, 1);
            let results = crate::evaluate_with($input, &Limits::default(), roller).unwrap();
            let actual = $cls::new().stringify(&results);
            assert_eq!(&actual, $expected);
        };
    }

    #[test]
    fn test_simple_stringify() {
        check!(SimpleStringifier, "2 + 3", "2+3: 5");
        check!(SimpleStringifier, "2d20", "2d20: 3 [2d20=1, 2]");
        check!(SimpleStringifier, "3d6k2 + 1", "3d6k2+1: 6 [3d6k2=[3, 2], 1]");
        check!(SimpleStringifier, "1d6; 2", "1d6: 1 [1d6=1]\n2: 2");
    }

    #[test]
    fn test_markdown_stringify() {
        check!(MarkdownStringifier, "2 + 3", "__2+3__: **5**");
        check!(MarkdownStringifier, "2d20", "__2d20__: **3** [2d20=1, 2]");
        check!(MarkdownStringifier, "2#1d4", "__2#1d4__: 2 # **1** [1d4=1] **2** [1d4=2]");
        check!(
            MarkdownStringifier,
            "1d2#1d6",
            "__1d2#1d6__: 1 [1d2=1] # **2** [1d6=2]"
        );
    }

    #[test]
    fn test_markdown_check() {
        let roller = ScriptedRoller::new([7]);
        let results = crate::evaluate_with("1eA", &Limits::default(), roller).unwrap();
        let actual = MarkdownStringifier::new().stringify(&results);
        assert_eq!(actual, "__1eA__: **1 success, 1 advantage** [1eA=S/A]");
    }
}
