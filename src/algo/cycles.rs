/*!
# Cycle Detection

- Directed graphs are searched with a three-color DFS: reaching a node that is still on the
  DFS stack (gray) closes a cycle.
- Undirected graphs are searched with a DFS that remembers the tree edge a node was entered
  through; reaching an already visited node over any other edge closes a cycle. Parallel edges
  and self-loops therefore count as cycles, while walking back along the tree edge does not.

Both searches keep an explicit stack of frames, so deep graphs do not exhaust the call stack.
*/

use tracing::debug;

use super::*;

/// DFS state of a node in the directed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// A frame of the explicit DFS stack: a node and the position of the next neighbor to inspect
#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: usize,
    cursor: usize,
}

impl StackFrame {
    fn new(node: usize) -> Self {
        Self { node, cursor: 0 }
    }
}

/// Provides cycle detection for directed and undirected graphs
pub trait CycleDetection: AdjacencyList + Sized {
    /// Returns *true* if the graph contains a cycle, dispatching on directedness.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let mut g: PlainGraph<u32> = Graph::from_edges(true, [(1, 2), (2, 3)]);
    /// assert!(!g.has_cycle());
    ///
    /// g.add_edge(3, 1, ());
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        if self.is_directed() {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        }
    }

    /// Returns *true* if the graph contains no cycle
    fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }

    /// Treats every adjacency entry as a directed edge and returns *true* if a directed cycle
    /// exists. Self-loops are cycles.
    fn has_directed_cycle(&self) -> bool {
        let index = IdIndex::new(self.ordered_vertices().iter());
        let nbs = index.adjacency(self);

        let mut colors = vec![Color::White; index.len()];
        let mut stack: Vec<StackFrame> = Vec::new();

        for root in 0..index.len() {
            if colors[root] != Color::White {
                continue;
            }
            colors[root] = Color::Gray;
            stack.push(StackFrame::new(root));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                if let Some(&v) = nbs[u].get(frame.cursor) {
                    frame.cursor += 1;
                    match colors[v] {
                        Color::White => {
                            colors[v] = Color::Gray;
                            stack.push(StackFrame::new(v));
                        }
                        Color::Gray => {
                            debug!(from = ?index.id_of(u), to = ?index.id_of(v), "directed cycle detected");
                            return true;
                        }
                        Color::Black => {}
                    }
                } else {
                    colors[u] = Color::Black;
                    stack.pop();
                }
            }
        }

        false
    }

    /// Treats the graph as undirected and returns *true* if a cycle exists.
    ///
    /// The graph's adjacency entries are used as stored, so this is only meaningful for
    /// undirected graphs (where every edge is stored in both directions).
    fn has_undirected_cycle(&self) -> bool {
        let index = IdIndex::new(self.ordered_vertices().iter());
        let nbs = index.adjacency(self);

        let mut visited = vec![false; index.len()];
        // (frame, parent whose entry back along the tree edge is still to be skipped)
        let mut stack: Vec<(StackFrame, Option<usize>)> = Vec::new();

        for root in 0..index.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((StackFrame::new(root), None));

            while let Some((frame, parent)) = stack.last_mut() {
                let u = frame.node;
                let Some(&v) = nbs[u].get(frame.cursor) else {
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;

                if *parent == Some(v) {
                    // skip exactly one entry back to the parent: the reverse of the tree edge
                    *parent = None;
                    continue;
                }

                if visited[v] {
                    debug!(from = ?index.id_of(u), to = ?index.id_of(v), "undirected cycle detected");
                    return true;
                }

                visited[v] = true;
                stack.push((StackFrame::new(v), Some(u)));
            }
        }

        false
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + Sized {}
