use rand::Rng;
use rand_distr::{Distribution, Geometric, StandardGeometric};

/// Number of failures before the first success of independent Bernoulli trials.
/// `p = 1/2` is the default density of many generators and has a faster dedicated sampler.
#[derive(Debug, Copy, Clone)]
pub enum GeometricDistribution {
    /// General geometric distribution
    General(Geometric),
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
}

impl Distribution<u64> for GeometricDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            GeometricDistribution::General(distr) => distr.sample(rng),
            GeometricDistribution::OneHalf(distr) => distr.sample(rng),
        }
    }
}

impl GeometricDistribution {
    /// Creates the distribution for success probability `prob`.
    /// Returns `None` if `prob` is not in `[0, 1]`.
    pub fn from_prob(prob: f64) -> Option<Self> {
        if prob == 0.5 {
            Some(Self::OneHalf(StandardGeometric))
        } else {
            Geometric::new(prob).ok().map(Self::General)
        }
    }
}

/// Enumerates the positions in `0..end` whose Bernoulli trial succeeds, jumping from one success
/// to the next with geometrically distributed gaps.
#[derive(Debug)]
pub struct GeometricSkips<'a, R> {
    rng: &'a mut R,
    distr: Option<GeometricDistribution>,
    next: u64,
    end: u64,
}

impl<'a, R: Rng> GeometricSkips<'a, R> {
    /// Creates the iterator for success probability `prob`.
    /// Empty if `prob` is zero or not a probability.
    pub fn new(rng: &'a mut R, prob: f64, end: u64) -> Self {
        let distr = (prob > 0.0)
            .then(|| GeometricDistribution::from_prob(prob))
            .flatten();
        Self {
            rng,
            distr,
            next: 0,
            end,
        }
    }
}

impl<R: Rng> Iterator for GeometricSkips<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let distr = self.distr?;
        if self.next >= self.end {
            return None;
        }

        let pos = match self.next.checked_add(self.rng.sample(distr)) {
            Some(pos) if pos < self.end => pos,
            _ => {
                self.next = self.end;
                return None;
            }
        };

        self.next = pos + 1;
        Some(pos)
    }
}
