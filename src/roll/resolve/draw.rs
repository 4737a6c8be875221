use super::*;
use crate::common::*;
use crate::roll::Number;

/// A named face and the image that shows it.
struct Face {
    name: &'static str,
    symbol: &'static str,
}

const fn face(name: &'static str, symbol: &'static str) -> Face {
    Face { name, symbol }
}

const MANA: &[Face] = &[
    face("Black", "mk/mana-black.png"),
    face("White", "mk/mana-white.png"),
    face("Red", "mk/mana-red.png"),
    face("Green", "mk/mana-green.png"),
    face("Blue", "mk/mana-blue.png"),
    face("Gold", "mk/mana-gold.png"),
];

/// Faces of the King of Tokyo die, with the code that loads a die onto it.
const TOKYO: &[(char, Face, &str)] = &[
    ('1', face("1", "kt/kt-1.png"), "kt/kt-1-l.png"),
    ('2', face("2", "kt/kt-2.png"), "kt/kt-2-l.png"),
    ('3', face("3", "kt/kt-3.png"), "kt/kt-3-l.png"),
    ('h', face("Heart", "kt/kt-h.png"), "kt/kt-h-l.png"),
    ('e', face("Energy", "kt/kt-e.png"), "kt/kt-e-l.png"),
    ('a', face("Attack", "kt/kt-a.png"), "kt/kt-a-l.png"),
];

const RUNES: &[Face] = &[
    face("t", "runes/01.png"),
    face("b", "runes/02.png"),
    face("e", "runes/03.png"),
    face("m", "runes/04.png"),
    face("l", "runes/05.png"),
    face("ng", "runes/06.png"),
    face("d", "runes/07.png"),
    face("o", "runes/08.png"),
    face("h", "runes/09.png"),
    face("n", "runes/10.png"),
    face("i", "runes/11.png"),
    face("j", "runes/12.png"),
    face("ei", "runes/13.png"),
    face("p", "runes/14.png"),
    face("z", "runes/15.png"),
    face("s", "runes/16.png"),
    face("f", "runes/17.png"),
    face("u", "runes/18.png"),
    face("th", "runes/19.png"),
    face("a", "runes/20.png"),
    face("r", "runes/21.png"),
    face("k", "runes/22.png"),
    face("g", "runes/23.png"),
    face("w", "runes/24.png"),
];

/// Collects drawn faces (1-based) into a term worth the sum of the faces.
fn tally<'f>(term: &str, drawn: impl IntoIterator<Item = (Int, &'f str, &'f str)>) -> ResolvedTerm {
    let mut total = 0;
    let mut names = Vec::new();
    let mut symbols = Vec::new();
    for (index, name, symbol) in drawn {
        total += index;
        names.push(name);
        symbols.push(symbol.to_string());
    }
    ResolvedTerm::itemized(Number::Int(total), term, names, symbols)
}

/// `NxM`: Mage Knight mana dice.
pub struct Mana {
    pattern: Regex,
}

impl Mana {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^([0-9]+)x(M)$"),
        }
    }
}

impl Resolve for Mana {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let num = parse_count(&caps[1]);
        ctx.limits().check_dice(num)?;
        let drawn: Vec<_> = (0..num)
            .map(|_| {
                let index = ctx.roll(MANA.len() as Int);
                let face = &MANA[index as usize - 1];
                (index, face.name, face.symbol)
            })
            .collect();
        Ok(tally(term, drawn))
    }
}

/// `NxK[123hea]*`: King of Tokyo dice. The i-th trailing code loads the
/// i-th die, which then shows that face without being rolled.
pub struct Tokyo {
    pattern: Regex,
}

impl Tokyo {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^([0-9]+)x(K)([123hea]*)$"),
        }
    }
}

impl Resolve for Tokyo {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let num = parse_count(&caps[1]);
        ctx.limits().check_dice(num)?;
        let mut loaded = caps[3].chars();
        let drawn: Vec<_> = (0..num)
            .map(|_| {
                let forced = loaded
                    .next()
                    .and_then(|code| TOKYO.iter().position(|(c, ..)| *c == code));
                match forced {
                    Some(i) => {
                        let (_, face, symbol) = &TOKYO[i];
                        (i as Int + 1, face.name, *symbol)
                    }
                    None => {
                        let index = ctx.roll(TOKYO.len() as Int);
                        let (_, face, _) = &TOKYO[index as usize - 1];
                        (index, face.name, face.symbol)
                    }
                }
            })
            .collect();
        Ok(tally(term, drawn))
    }
}

/// `NxR`: Elder Futhark runes, drawn from a single bag without replacement.
pub struct Runes {
    pattern: Regex,
}

impl Runes {
    pub fn new() -> Self {
        Self {
            pattern: compile(r"^([0-9]+)x(R)$"),
        }
    }
}

impl Resolve for Runes {
    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn resolve<R: Roller>(
        &self,
        term: &str,
        caps: &Captures<'_>,
        ctx: &mut RollContext<R>,
    ) -> Result<ResolvedTerm> {
        let num = parse_count(&caps[1]);
        if num > RUNES.len() as Int {
            log::debug!("cannot draw {} of {} runes", num, RUNES.len());
            return Err(EvalError::Limit);
        }
        let num = num as usize;

        let mut bag: Vec<Int> = (1..=RUNES.len() as Int).collect();
        ctx.roller().partial_shuffle(&mut bag, num);
        let drawn = bag[..num].iter().map(|&index| {
            let face = &RUNES[index as usize - 1];
            (index, face.name, face.symbol)
        });
        Ok(tally(term, drawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;
    use crate::roll::roller::{CountingRoller, ScriptedRoller, StepRoller};
    use crate::roll::Value;

    fn resolve_with<D: Resolve>(die: D, term: &str, script: Vec<Int>) -> Result<ResolvedTerm> {
        let mut ctx = RollContext::new(Limits::default(), ScriptedRoller::new(script));
        let caps = die.pattern().captures(term).unwrap();
        die.resolve(term, &caps, &mut ctx)
    }

    #[test]
    fn test_mana() {
        let actual = resolve_with(Mana::new(), "2xM", vec![3, 6]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(9)));
        assert_eq!(actual.detail, " [2xM=Red, Gold]");
        assert_eq!(actual.symbols, vec!["mk/mana-red.png", "mk/mana-gold.png"]);
    }

    #[test]
    fn test_tokyo_loaded() {
        let actual = resolve_with(Tokyo::new(), "3xKh", vec![1, 6]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(4 + 1 + 6)));
        assert_eq!(actual.detail, " [3xKh=Heart, 1, Attack]");
        assert_eq!(
            actual.symbols,
            vec!["kt/kt-h-l.png", "kt/kt-1.png", "kt/kt-a.png"]
        );
    }

    #[test]
    fn test_tokyo_fully_loaded_draws_nothing() {
        let (roller, calls) = CountingRoller::new(StepRoller::new(1, 1));
        let mut ctx = RollContext::new(Limits::default(), roller);
        let die = Tokyo::new();
        let caps = die.pattern().captures("2xK3e").unwrap();
        let actual = die.resolve("2xK3e", &caps, &mut ctx).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int(3 + 5)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_runes_without_replacement() {
        let actual = resolve_with(Runes::new(), "24xR", vec![]).unwrap();
        assert_eq!(actual.value, Value::Numeric(Number::Int((1..=24).sum())));
        assert_eq!(actual.symbols.len(), 24);
        let mut symbols = actual.symbols.clone();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 24);
    }

    #[test]
    fn test_runes_draw() {
        // bag [1..=24]: swap 0<->2, then 1<->1
        let actual = resolve_with(Runes::new(), "2xR", vec![2, 1]).unwrap();
        assert_eq!(actual.detail, " [2xR=e, b]");
        assert_eq!(actual.symbols, vec!["runes/03.png", "runes/02.png"]);
    }

    #[test]
    fn test_caps() {
        assert_eq!(resolve_with(Runes::new(), "25xR", vec![]), Err(EvalError::Limit));
        assert_eq!(resolve_with(Mana::new(), "101xM", vec![]), Err(EvalError::Limit));
        assert_eq!(resolve_with(Tokyo::new(), "101xK", vec![]), Err(EvalError::Limit));
    }
}
