use rand::Rng;

use crate::popcount::Candidate;

pub trait ValueSource {
    fn next(&mut self) -> Candidate;
}

impl<F> ValueSource for F
where
    F: FnMut() -> Candidate,
{
    #[inline]
    fn next(&mut self) -> Candidate {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub Candidate);

impl ValueSource for Constant {
    #[inline]
    fn next(&mut self) -> Candidate {
        self.0
    }
}

/// Replays a fixed list of values in order, starting over at the end.
/// An empty list yields `0`.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    values: Vec<Candidate>,
    pos: usize,
}

impl Replay {
    pub fn new(values: impl IntoIterator<Item = Candidate>) -> Self {
        Replay {
            values: values.into_iter().collect(),
            pos: 0,
        }
    }
}

impl ValueSource for Replay {
    fn next(&mut self) -> Candidate {
        let Some(&value) = self.values.get(self.pos) else {
            return 0;
        };
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}

#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        RandomSource { rng }
    }
}

impl<R: Rng> ValueSource for RandomSource<R> {
    #[inline]
    fn next(&mut self) -> Candidate {
        self.rng.random()
    }
}
