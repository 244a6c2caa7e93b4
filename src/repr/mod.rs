/*!
# Graph Representation

This module provides [`Graph`], the storage behind every algorithm of this crate.

A [`Graph`] owns a *node table* (identifier to [`Node`](crate::node::Node)) and an
*adjacency table* (identifier to a list of `(neighbor, property)` pairs). Both tables are keyed
by the same identifiers at all times. Whether the graph is directed is decided at construction
time and never changes.

All read access goes through the capability traits in [`ops`](crate::ops), so algorithms work
on any type implementing them.
*/

mod graph;

pub use graph::*;
