use crate::common::Int;
use crate::error::{EvalError, Result};
use log::debug;

/// Caps that bound the work a single evaluation may do.
///
/// Every cap is checked before the work it guards, so an oversized request
/// fails without drawing a single die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Dice rolled by a single term.
    #[serde(alias = "rolls")]
    pub max_dice_per_roll: Int,
    /// Faces on a single die.
    #[serde(alias = "sides")]
    pub max_sides: Int,
    /// `;`-separated expressions in one input.
    #[serde(alias = "expr")]
    pub max_expressions: Int,
    /// `#`-separated parts in one expression.
    #[serde(alias = "parts")]
    pub max_parts: Int,
    /// Tokens in one part.
    #[serde(alias = "tokens")]
    pub max_tokens: Int,
    /// Times a part may be repeated.
    #[serde(alias = "times")]
    pub max_repeat: Int,
    /// Largest `N` accepted by `NcK` and `NpK`.
    #[serde(alias = "combinatoric")]
    pub max_combinatoric: Int,
}

impl Limits {
    pub const DEFAULT: Self = Self {
        max_dice_per_roll: 100,
        max_sides: 10000,
        max_expressions: 20,
        max_parts: 4,
        max_tokens: 100,
        max_repeat: 100,
        max_combinatoric: 1000,
    };

    pub const fn with_defaults() -> Self {
        Self::DEFAULT
    }

    /// The defaults with every recognised key in `overrides` applied.
    ///
    /// Keys may be the field names or the short names (`rolls`, `sides`,
    /// `expr`, `parts`, `tokens`, `times`, `combinatoric`). Unknown keys are
    /// skipped.
    pub fn merged<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Int)>,
        K: AsRef<str>,
    {
        Self::DEFAULT.merge(overrides)
    }

    pub fn merge<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Int)>,
        K: AsRef<str>,
    {
        for (key, value) in overrides {
            match self.slot_mut(key.as_ref()) {
                Some(slot) => *slot = value.max(0),
                None => debug!("ignoring unknown limit {:?}", key.as_ref()),
            }
        }
        self
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Int> {
        Some(match key {
            "max_dice_per_roll" | "rolls" => &mut self.max_dice_per_roll,
            "max_sides" | "sides" => &mut self.max_sides,
            "max_expressions" | "expr" => &mut self.max_expressions,
            "max_parts" | "parts" => &mut self.max_parts,
            "max_tokens" | "tokens" => &mut self.max_tokens,
            "max_repeat" | "times" => &mut self.max_repeat,
            "max_combinatoric" | "combinatoric" => &mut self.max_combinatoric,
            _ => return None,
        })
    }

    pub(crate) fn check_dice(&self, num: Int) -> Result<()> {
        ensure_within("dice", num, self.max_dice_per_roll)
    }

    pub(crate) fn check_sides(&self, sides: Int) -> Result<()> {
        ensure_within("sides", sides, self.max_sides)
    }

    pub(crate) fn check_expressions(&self, count: usize) -> Result<()> {
        ensure_within("expressions", count as Int, self.max_expressions)
    }

    pub(crate) fn check_parts(&self, count: usize) -> Result<()> {
        ensure_within("parts", count as Int, self.max_parts)
    }

    pub(crate) fn check_tokens(&self, count: usize) -> Result<()> {
        ensure_within("tokens", count as Int, self.max_tokens)
    }

    pub(crate) fn check_repeat(&self, times: Int) -> Result<()> {
        ensure_within("repeat", times, self.max_repeat)
    }

    pub(crate) fn check_combinatoric(&self, n: Int) -> Result<()> {
        ensure_within("combinatoric range", n, self.max_combinatoric)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn ensure_within(what: &str, value: Int, cap: Int) -> Result<()> {
    if value > cap {
        debug!("{} {} over limit {}", what, value, cap);
        Err(EvalError::Limit)
    } else {
        Ok(())
    }
}
