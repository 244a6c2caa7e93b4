/*!
# Id Index

Algorithms keep their scratch state (colors, distances, residual capacities, ...) in dense
vectors. [`IdIndex`] assigns every node identifier of a graph an index in `0..n` and maps
back and forth between both worlds.
*/

use fxhash::FxHashMap;

use crate::{node::NodeId, ops::*};

use super::FromCapacity;

/// Bidirectional mapping between node identifiers and dense indices `0..n`
#[derive(Debug, Clone)]
pub struct IdIndex<Id> {
    ids: Vec<Id>,
    index: FxHashMap<Id, usize>,
}

impl<Id: NodeId> IdIndex<Id> {
    /// Assigns indices in iteration order. Repeated identifiers keep their first index.
    pub fn new<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a Id>,
        Id: 'a,
    {
        let ids = ids.into_iter();
        let mut res = Self {
            ids: Vec::with_capacity(ids.size_hint().0),
            index: FxHashMap::from_capacity(ids.size_hint().0),
        };
        for id in ids {
            if !res.index.contains_key(id) {
                res.index.insert(id.clone(), res.ids.len());
                res.ids.push(id.clone());
            }
        }
        res
    }

    /// Indexes all nodes of `graph` in the order of [`GraphNodeOrder::vertices`]
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder<Id = Id>,
    {
        Self::new(graph.vertices())
    }

    /// Returns the index of `id` or `None` if `id` is unknown
    #[inline]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the identifier at index `idx`.
    /// ** Panics if `idx >= self.len()` **
    #[inline]
    pub fn id_of(&self, idx: usize) -> &Id {
        &self.ids[idx]
    }

    /// Returns all identifiers ordered by their index
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Returns the number of indexed identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns *true* if no identifier is indexed
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maps a sequence of indices back to identifiers
    pub fn ids_of<I>(&self, indices: I) -> Vec<Id>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().map(|i| self.ids[i].clone()).collect()
    }

    /// Builds a dense out-adjacency over the indexed nodes.
    /// Every stored adjacency entry yields one `(head, weight)` pair, parallel entries included.
    pub fn weighted_adjacency<G, W, F>(&self, graph: &G, mut extractor: F) -> Vec<Vec<(usize, W)>>
    where
        G: AdjacencyList<Id = Id>,
        F: FnMut(&G::EdgeProp) -> W,
    {
        self.ids
            .iter()
            .map(|u| {
                graph
                    .neighbors_of(u)
                    .filter_map(|(v, p)| Some((self.index_of(v)?, extractor(p))))
                    .collect()
            })
            .collect()
    }

    /// Builds a dense out-adjacency over the indexed nodes, ignoring edge properties
    pub fn adjacency<G>(&self, graph: &G) -> Vec<Vec<usize>>
    where
        G: AdjacencyList<Id = Id>,
    {
        self.ids
            .iter()
            .map(|u| {
                graph
                    .neighbors_of(u)
                    .filter_map(|(v, _)| self.index_of(v))
                    .collect()
            })
            .collect()
    }
}
