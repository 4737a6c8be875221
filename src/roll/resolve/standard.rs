use super::*;
use crate::common::*;
use crate::roll::Number;

const MAX_REROLLS: Int = 99;

/// `NdS[rX|mX][eX|oX][tX|hX|xX|uX|kX|lX]`, `NdF` and `NdC`.
pub struct Standard {
    pattern: Regex,
}

impl Standard {
    pub fn new() -> Self {
        Self {
            pattern: compile(
                r"^([0-9]+)d(?:([0-9]+)(r[0-9]+|m[0-9]+)?([eo][0-9]+)?([thxukl][0-9]+)?|(F)|(C))$",
            ),
        }
    }
}

/// A one-letter modifier and its argument, e.g. `k2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Modifier {
    code: char,
    arg: Int,
}

impl Modifier {
    fn capture(caps: &Captures<'_>, i: usize) -> Option<Self> {
        let m = caps.get(i)?.as_str();
        let code = m.chars().next()?;
        Some(Self {
            code,
            arg: parse_count(&m[1..]),
        })
    }

    fn is(self, code: char) -> bool {
        self.code == code
    }
}

/// The settings of one `NdS` term with numbered sides.
#[derive(Debug, Copy, Clone)]
struct Poly {
    min: Int,
    max: Int,
    raise: Int,
    threshold: Int,
    rerolls: Int,
    trailing: Option<Modifier>,
}

impl Poly {
    fn new(max: Int, bound: Option<Modifier>, explode: Option<Modifier>, trailing: Option<Modifier>) -> Self {
        let min = match bound {
            Some(m) if m.is('r') => m.arg.saturating_add(1),
            _ => 1,
        };
        let raise = match bound {
            Some(m) if m.is('m') => m.arg,
            _ => 0,
        };

        let target = trailing.map_or(0, |m| m.arg);
        let (mut threshold, mut rerolls) = match trailing {
            Some(m) if m.is('h') => (max, MAX_REROLLS),
            Some(m) if m.is('t') && target > max => (max, MAX_REROLLS),
            _ => (0, 0),
        };
        if let Some(m) = explode {
            threshold = m.arg;
            rerolls = if m.is('e') { 1 } else { MAX_REROLLS };
        }

        Self {
            min: min.min(max),
            max,
            raise: raise.min(max),
            threshold,
            rerolls,
            trailing,
        }
    }

    fn draw<R: Roller>(&self, ctx: &mut RollContext<R>) -> Int {
        ctx.roll_between(self.min, self.max).max(self.raise)
    }

    /// Rolls one die and its explosions.
    fn roll_die<R: Roller>(&self, ctx: &mut RollContext<R>) -> Vec<Int> {
        let mut roll = self.draw(ctx);
        let mut rolls = vec![roll];
        let mut rerolls = self.rerolls;
        while rerolls > 0 && roll >= self.threshold {
            roll = self.draw(ctx);
            rolls.push(roll);
            rerolls -= 1;
        }
        rolls
    }

    /// Scores one die: what it adds to the result and how it is shown.
    fn score(&self, rolls: &[Int]) -> (Int, String) {
        let sum: Int = rolls.iter().sum();
        let shown = || match rolls {
            [x] => x.to_string(),
            _ => bracketed(rolls),
        };
        match self.trailing {
            Some(Modifier { code: 't', arg }) => (Int::from(sum >= arg), sum.to_string()),
            Some(Modifier { code: 'u', arg }) => (Int::from(sum <= arg), sum.to_string()),
            Some(Modifier { code: 'h', arg }) => {
                (rolls.iter().filter(|&&x| x >= arg).count() as Int, shown())
            }
            Some(Modifier { code: 'x', arg }) => {
                let hits = rolls.iter().filter(|&&x| x >= arg).count();
                let crits = rolls.iter().filter(|&&x| x == self.max).count();
                ((hits + crits) as Int, shown())
            }
            _ => (sum, sum.to_string()),
        }
    }
}

/// Best score of a chase pool: the top face, a set of equal faces, or a run
/// of three or more consecutive faces.
fn chase_score(rolls: &[Int]) -> Int {
    let (_, max) = Sides::Chase.faces();
    let mut counts = vec![0; max as usize + 1];
    for &x in rolls {
        counts[x as usize] += 1;
    }

    let mut best = rolls.iter().copied().max().unwrap_or(0);
    let mut straight = 0;
    for face in 1..=max {
        let count = counts[face as usize];
        best = best.max(count * face);
        if count == 0 {
            straight = 0;
        } else {
            straight += 1;
            if straight >= 3 {
                best = best.max(straight * (2 * face - straight + 1) / 2);
            }
        }
    }
    best
}

/// Keeps the `count` highest (or lowest) results. The kept ones lead the
/// detail as a group, followed by the discarded ones.
fn keep(mut results: Vec<Int>, count: Int, highest: bool) -> (Vec<Int>, Vec<String>) {
    results.sort_unstable();
    if highest {
        results.reverse();
    }
    let discarded = results.split_off((count.max(0) as usize).min(results.len()));
    let mut detail = Vec::with_capacity(discarded.len() + 1);
    if !results.is_empty() {
        detail.push(bracketed(&results));
    }
    detail.extend(discarded.iter().map(ToString::to_string));
    (results, detail)
}

impl Resolve for Standard {
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
        let sides = if caps.get(6).is_some() {
            Sides::Fudge
        } else if caps.get(7).is_some() {
            Sides::Chase
        } else {
            caps[2].parse::<Sides>()?
        };
        let (min, max) = sides.faces();
        ctx.limits().check_sides(max)?;

        let (value, detail): (Int, Vec<String>) = match sides {
            Sides::Fudge => {
                let rolls: Vec<Int> = (0..num).map(|_| ctx.roll_between(min, max)).collect();
                let detail = rolls.iter().map(|&x| match x {
                    x if x > 0 => format!("+{}", x),
                    x => x.to_string(),
                });
                (rolls.iter().sum(), detail.collect())
            }
            Sides::Chase => {
                let rolls: Vec<Int> = (0..num).map(|_| ctx.roll_between(min, max)).collect();
                let detail = rolls.iter().map(ToString::to_string).collect();
                (chase_score(&rolls), detail)
            }
            Sides::Poly(_) => {
                let poly = Poly::new(
                    max,
                    Modifier::capture(caps, 3),
                    Modifier::capture(caps, 4),
                    Modifier::capture(caps, 5),
                );
                let (results, detail): (Vec<Int>, Vec<String>) =
                    (0..num).map(|_| poly.score(&poly.roll_die(ctx))).unzip();
                match poly.trailing {
                    Some(m) if m.is('k') || m.is('l') => {
                        let (kept, detail) = keep(results, m.arg, m.is('k'));
                        (kept.iter().sum(), detail)
                    }
                    _ => (results.iter().sum(), detail),
                }
            }
        };

        Ok(ResolvedTerm::itemized(Number::Int(value), term, detail, Vec::new()))
    }
}
