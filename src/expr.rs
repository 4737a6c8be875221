use crate::common::*;
use crate::roll::{Number, Value};

/// The outcome of resolving one term, or of evaluating one repetition of a
/// part, in which case `detail` and `symbols` are those of all its terms.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTerm {
    pub value: Value,
    /// Human-readable breakdown such as ` [3d6=4, 1, 6]`.
    pub detail: String,
    /// Opaque image identifiers, e.g. `eote/a-s-a.png`.
    pub symbols: Vec<String>,
}

impl ResolvedTerm {
    pub fn new(value: impl Into<Value>, detail: String, symbols: Vec<String>) -> Self {
        Self {
            value: value.into(),
            detail,
            symbols,
        }
    }

    /// A value with nothing to show for it, e.g. a literal.
    pub fn plain(value: impl Into<Value>) -> Self {
        Self::new(value, String::new(), Vec::new())
    }

    /// `" [<term>=<items>]"`, the detail format shared by every die type.
    pub(crate) fn itemized<I>(value: impl Into<Value>, term: &str, items: I, symbols: Vec<String>) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let items = items
            .into_iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(value, format!(" [{}={}]", term, items), symbols)
    }
}

/// One `#`-separated part with a term per repetition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartResult {
    pub source_text: String,
    pub resolved_terms: NonEmpty<ResolvedTerm>,
}

impl PartResult {
    /// Sum of the numeric repetitions; checks contribute nothing.
    pub fn total(&self) -> Number {
        self.resolved_terms
            .iter()
            .filter_map(|term| term.value.as_number())
            .sum()
    }
}

/// One `;`-separated roll.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionResult {
    pub source_text: String,
    pub parts: NonEmpty<PartResult>,
}

impl ExpressionResult {
    pub fn final_part(&self) -> &PartResult {
        self.parts.last()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts
            .iter()
            .flat_map(|part| part.resolved_terms.iter())
            .flat_map(|term| term.symbols.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itemized() {
        let term = ResolvedTerm::itemized(Number::Int(8), "3d6k2", ["[5, 3]".to_string(), "2".to_string()], vec![]);
        assert_eq!(term.detail, " [3d6k2=[5, 3], 2]");
        let term = ResolvedTerm::itemized(Number::ZERO, "0d6", Vec::<Int>::new(), vec![]);
        assert_eq!(term.detail, " [0d6=]");
    }

    #[test]
    fn test_part_total() {
        let part = PartResult {
            source_text: "1d4".into(),
            resolved_terms: vec1![ResolvedTerm::plain(Number::Int(2)), ResolvedTerm::plain(Number::Int(3))],
        };
        assert_eq!(part.total(), Number::Int(5));
    }

    #[test]
    fn test_symbols_in_order() {
        let a = ResolvedTerm::new(Number::Int(1), String::new(), vec!["a.png".into()]);
        let b = ResolvedTerm::new(Number::Int(1), String::new(), vec!["b.png".into(), "c.png".into()]);
        let expr = ExpressionResult {
            source_text: "x".into(),
            parts: vec1![PartResult {
                source_text: "x".into(),
                resolved_terms: vec1![a, b],
            }],
        };
        assert_eq!(expr.symbols().collect::<Vec<_>>(), vec!["a.png", "b.png", "c.png"]);
    }
}
