/*!
# Node Representation

A node is the atomic stored entity of a [`Graph`](crate::repr::Graph): an identifier together
with a payload value. The identifier never changes once the node exists; the payload is mutable.

Identifiers can be any type implementing [`NodeId`], i.e. a hashable and totally ordered value.
The total order is what allows undirected graphs to report each edge exactly once (see
[`AdjacencyList::edges`](crate::ops::AdjacencyList::edges)).
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Bound for node identifiers.
///
/// `Ord` is required to de-duplicate the two stored directions of an undirected edge,
/// `Debug` to render identifiers into errors and log events.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<I> NodeId for I where I: Clone + Eq + Hash + Ord + Debug {}

/// An identifier with a payload value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T, Id = usize> {
    id: Id,
    value: T,
}

impl<T, Id> Node<T, Id> {
    /// Creates a new node `id` carrying `value`
    pub fn new(id: Id, value: T) -> Self {
        Self { id, value }
    }

    /// Creates a new node `id` carrying the default payload
    pub fn with_default(id: Id) -> Self
    where
        T: Default,
    {
        Self::new(id, T::default())
    }

    /// Returns the identifier of the node
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns a reference to the payload
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the payload
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the payload and returns the previous one
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Splits the node into identifier and payload
    pub fn into_parts(self) -> (Id, T) {
        (self.id, self.value)
    }
}

impl<T, Id> Display for Node<T, Id>
where
    Id: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.id)
    }
}

impl<T, Id> From<(Id, T)> for Node<T, Id> {
    fn from(value: (Id, T)) -> Self {
        Node::new(value.0, value.1)
    }
}
