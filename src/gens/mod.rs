/*!
# Graph Generators

This module provides deterministic substructure generators and random graph generators.

- [`GeneratorSubstructures`] adds paths, cycles and cliques to an existing graph, carrying a
  given edge property.
- [`Gnp`] is a builder for the Erdős–Rényi `G(n,p)` model. It streams edges between nodes
  `0..n`, so it can feed any graph.
- [`RandomGraph`] wraps the builders into constructors for whole [`Graph`] instances with
  `usize` identifiers.

The typical usage workflow of a random generator is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

All random generators take the random number generator as argument, so seeding it (e.g. with
`rand_pcg::Pcg64Mcg::seed_from_u64`) makes the output reproducible.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: usize) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator over the nodes `0..n`.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge<usize>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<usize>>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
///
/// Every node `0..n` is created, including isolated ones. For undirected graphs, only edges
/// `(u, v)` with `u <= v` of the stream are kept so that every pair is sampled once.
pub trait RandomGraph: GraphType + Sized {
    /// Creates a `G(n,p)` graph whose edges carry the default property
    fn gnp<R>(rng: &mut R, directed: bool, n: usize, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops whose edges carry the default property
    fn gnp_no_loops<R>(rng: &mut R, directed: bool, n: usize, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops and draws the property of every edge from `prop`
    fn gnp_with<R, F>(rng: &mut R, directed: bool, n: usize, p: f64, prop: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> Self::EdgeProp;
}

impl<T, P> RandomGraph for Graph<T, usize, P>
where
    T: Default,
    P: Default + Clone,
{
    fn gnp<R>(rng: &mut R, directed: bool, n: usize, p: f64) -> Self
    where
        R: Rng,
    {
        let edges = Gnp::new().nodes(n).prob(p).generate(rng);
        build(directed, n, edges, |_| true, || P::default())
    }

    fn gnp_no_loops<R>(rng: &mut R, directed: bool, n: usize, p: f64) -> Self
    where
        R: Rng,
    {
        let edges = Gnp::new().nodes(n).prob(p).generate(rng);
        build(directed, n, edges, |e| !e.is_loop(), || P::default())
    }

    fn gnp_with<R, F>(rng: &mut R, directed: bool, n: usize, p: f64, mut prop: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> P,
    {
        let edges = Gnp::new().nodes(n).prob(p).generate(rng);
        build(directed, n, edges, |e| !e.is_loop(), || prop(rng))
    }
}

/// Creates a graph with nodes `0..n` and every accepted edge, drawing properties from `prop`
fn build<T, P, K, F>(
    directed: bool,
    n: usize,
    edges: Vec<Edge<usize>>,
    keep: K,
    mut prop: F,
) -> Graph<T, usize, P>
where
    T: Default,
    P: Clone,
    K: Fn(&Edge<usize>) -> bool,
    F: FnMut() -> P,
{
    let mut graph = Graph::with_capacity(directed, n);
    for u in 0..n {
        graph.add_node(u);
    }
    for Edge(u, v, ()) in edges
        .into_iter()
        .filter(|e| (directed || e.is_normalized()) && keep(e))
    {
        graph.add_edge(u, v, prop());
    }
    graph
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn gnp_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let graph: PlainGraph = Graph::gnp(rng, false, 30, 1.0);
        assert_eq!(graph.node_count(), 30);
        assert_eq!(graph.edge_count(), 30 * 31 / 2);

        let graph: PlainGraph = Graph::gnp_no_loops(rng, true, 30, 1.0);
        assert_eq!(graph.edge_count(), 30 * 29);

        let graph: PlainGraph = Graph::gnp(rng, true, 30, 0.0);
        assert_eq!(graph.node_count(), 30);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn gnp_with_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let graph: Graph<(), usize, u32> =
            Graph::gnp_with(rng, false, 50, 0.2, |r| r.random_range(1..10));

        assert!(graph.edge_count() > 0);
        for Edge(u, v, w) in graph.list_edges() {
            assert!(u < v);
            assert!((1..10).contains(&w));
            assert_eq!(graph.find_edge_props(&v, &u), vec![w]);
        }
    }
}
