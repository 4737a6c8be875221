use super::*;
use crate::common::*;
use crate::roll::Number;

const SIDES: Int = 10;
const MAX_REROLLS: Int = 99;

/// `NxxK`: a Double Cross dice pool. Every d10 showing K or more is rolled
/// again and scores 10; the first generation with no survivors adds its
/// highest face.
pub struct DoubleCross {
    pattern: Regex,
}

impl DoubleCross {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^([0-9]+)xx([0-9]+)$"),
        }
    }
}

impl Resolve for DoubleCross {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let mut num = parse_count(&caps[1]);
        let threshold = parse_count(&caps[2]);
        ctx.limits().check_dice(num)?;

        let mut total: Int = 0;
        let mut rerolls = MAX_REROLLS;
        let mut generations = Vec::new();
        while num > 0 && rerolls >= 0 {
            let rolls: Vec<Int> = (0..num).map(|_| ctx.roll(SIDES)).collect();
            num = rolls.iter().filter(|&&x| x >= threshold).count() as Int;
            if num > 0 {
                total += SIDES;
                rerolls -= 1;
            } else {
                total += rolls.iter().copied().max().unwrap_or(0);
            }
            generations.push(bracketed(&rolls));
        }

        Ok(ResolvedTerm::itemized(Number::Int(total), term, generations, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;
    use crate::roll::roller::ScriptedRoller;
    use crate::roll::Value;

    fn resolve_with(term: &str, script: Vec<Int>) -> Result<ResolvedTerm> {
        let mut ctx = RollContext::new(Limits::default(), ScriptedRoller::new(script));
        let die = DoubleCross::new();
        let caps = die.pattern().captures(term).unwrap();
        die.resolve(term, &caps, &mut ctx)
    }

    #[test]
    fn test_no_explosion() {
        let actual = resolve_with("3xx8", vec![2, 7, 5]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(7)));
        assert_eq!(actual.detail, " [3xx8=[2, 7, 5]]");
    }

    #[test]
    fn test_explosions_chain() {
        // two survivors, then one, then none
        let actual = resolve_with("3xx8", vec![9, 8, 1, 10, 3, 4]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(10 + 10 + 4)));
        assert_eq!(actual.detail, " [3xx8=[9, 8, 1], [10, 3], [4]]");
    }

    #[test]
    fn test_generations_are_capped() {
        let actual = resolve_with("1xx1", vec![]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(100 * 10)));
    }

    #[test]
    fn test_dice_cap() {
        assert_eq!(resolve_with("101xx8", vec![]), Err(EvalError::Limit));
    }
}
