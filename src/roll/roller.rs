use crate::common::Int;
use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Everything random the evaluator does goes through [Roller::roll_between],
/// so a deterministic implementation makes whole evaluations reproducible.
pub trait Roller {
    /// A uniform integer in `min..=max`. Implementations return `min` when
    /// the range is empty or a single value.
    fn roll_between(&mut self, min: Int, max: Int) -> Int;

    fn roll(&mut self, sides: Int) -> Int {
        self.roll_between(1, sides)
    }

    /// Shuffles the first `k` slots of `items` into a uniform random
    /// selection (a truncated Fisher-Yates pass).
    fn partial_shuffle<T>(&mut self, items: &mut [T], k: usize)
    where
        Self: Sized,
    {
        let len = items.len();
        if len == 0 {
            return;
        }
        for i in 0..k.min(len - 1) {
            let j = self.roll_between(i as Int, (len - 1) as Int) as usize;
            items.swap(i, j);
        }
    }

    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        let len = items.len();
        self.partial_shuffle(items, len);
    }
}

impl<R: Rng> Roller for R {
    fn roll_between(&mut self, min: Int, max: Int) -> Int {
        if min >= max {
            min
        } else {
            self.gen_range(min..=max)
        }
    }
}

/// The random source used by [crate::evaluate].
pub type DefaultRoller = rand::rngs::ThreadRng;

#[cfg(test)]
pub(crate) use test_utils::{CountingRoller, ScriptedRoller, StepRoller};

#[cfg(test)]
mod test_utils {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Walks upward through the faces: `initial`, `initial + step`, ...,
    /// wrapped into the requested range.
    pub(crate) struct StepRoller {
        current: Int,
        step: Int,
    }

    impl StepRoller {
        pub fn new(initial: Int, step: Int) -> Self {
            Self {
                current: initial,
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll_between(&mut self, min: Int, max: Int) -> Int {
            if min >= max {
                return min;
            }
            let ret = min + (self.current - 1).rem_euclid(max - min + 1);
            self.current += self.step;
            ret
        }
    }

    /// Replays a fixed list of draws, clamped into the requested range.
    /// Once the script runs out every draw is `min`.
    pub(crate) struct ScriptedRoller {
        script: VecDeque<Int>,
    }

    impl ScriptedRoller {
        pub fn new(script: impl IntoIterator<Item = Int>) -> Self {
            Self {
                script: script.into_iter().collect(),
            }
        }
    }

    impl Roller for ScriptedRoller {
        fn roll_between(&mut self, min: Int, max: Int) -> Int {
            if min >= max {
                return min;
            }
            self.script.pop_front().map_or(min, |x| x.clamp(min, max))
        }
    }

    /// Counts every call made to the wrapped roller.
    pub(crate) struct CountingRoller<R> {
        inner: R,
        calls: Rc<Cell<usize>>,
    }

    impl<R: Roller> CountingRoller<R> {
        pub fn new(inner: R) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            let roller = Self {
                inner,
                calls: Rc::clone(&calls),
            };
            (roller, calls)
        }
    }

    impl<R: Roller> Roller for CountingRoller<R> {
        fn roll_between(&mut self, min: Int, max: Int) -> Int {
            self.calls.set(self.calls.get() + 1);
            self.inner.roll_between(min, max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_roller_wraps() {
        let mut roller = StepRoller::new(5, 1);
        let rolls: Vec<_> = (0..4).map(|_| roller.roll(6)).collect();
        assert_eq!(rolls, vec![5, 6, 1, 2]);
    }

    #[test]
    fn test_scripted_roller() {
        let mut roller = ScriptedRoller::new([3, 9]);
        assert_eq!(roller.roll(6), 3);
        assert_eq!(roller.roll(6), 6);
        assert_eq!(roller.roll(6), 1);
        assert_eq!(roller.roll_between(-1, 1), -1);
    }

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let x = rng.roll_between(-1, 1);
            assert!((-1..=1).contains(&x));
        }
        assert_eq!(rng.roll_between(4, 4), 4);
    }

    #[test]
    fn test_partial_shuffle_is_a_selection() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<Int> = (1..=10).collect();
        rng.partial_shuffle(&mut items, 4);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_counting_roller() {
        let (mut roller, calls) = CountingRoller::new(StepRoller::new(1, 1));
        roller.roll(6);
        roller.roll(6);
        assert_eq!(calls.get(), 2);
    }
}
