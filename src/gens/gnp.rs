use super::*;
use crate::utils::geometric::GeometricSkips;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// All `n * n` ordered pairs are candidates, including self-loops and both orientations of every
/// pair. Filtering for undirected graphs or loop-free graphs is up to the caller
/// (see [`RandomGraph`]).
///
/// # Examples
/// ```
/// use propgraph::gens::*;
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let edges = Gnp::new().nodes(10).prob(1.0).generate(rng);
/// assert_eq!(edges.len(), 100);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n == 0 { 0.0 } else { d / self.n as f64 };
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: usize) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<usize>>
    where
        R: Rng,
    {
        let n = self.n;
        GeometricSkips::new(rng, self.probability(), n * n)
            .map(move |x| Edge((x / n) as usize, (x % n) as usize, ()))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(Gnp::new().nodes(20).prob(0.0).generate(rng).is_empty());

        let all = Gnp::new().nodes(20).prob(1.0).generate(rng);
        assert_eq!(all.len(), 400);
        assert_eq!(all[0], Edge(0, 0, ()));
        assert_eq!(all[21], Edge(1, 1, ()));

        assert!(Gnp::new().nodes(0).prob(0.5).generate(rng).is_empty());
    }

    #[test]
    fn edges_are_sorted_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = Gnp::new().nodes(50).prob(0.1).generate(rng);

        assert!(edges.iter().all(|Edge(u, v, _)| *u < 50 && *v < 50));
        assert!(edges.windows(2).all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 1000;
        let deg = 10.0;

        let mut total = 0;
        for _ in 0..10 {
            total += Gnp::new().nodes(n).avg_deg(deg).stream(rng).count();
        }

        let mean = total as f64 / 10.0;
        let expected = deg * n as f64;
        assert!((mean - expected).abs() < 0.05 * expected, "mean={mean}");
    }
}
