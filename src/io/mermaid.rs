//! # Mermaid
//!
//! Renders a graph as a [Mermaid](https://mermaid.js.org/) flowchart:
//! ```text
//! graph LR
//!   N1["A"]
//!   N2["B"]
//!
//!   N1 -->|3| N2
//! ```
//! Nodes are listed in increasing identifier order with their payload as label. Every connected
//! pair `(from, to)` produces a single arrow (`-->` if directed, `---` if undirected) labelled with
//! the property of its first stored entry; parallel edges are not drawn separately.
use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;
use crate::edge::Edge;

/// A writer for Mermaid flowcharts
#[derive(Debug, Clone)]
pub struct MermaidWriter {
    /// Flow direction (default: `LR`)
    direction: String,
    /// Prefix of a node (default: `N`)
    prefix: String,
}

impl Default for MermaidWriter {
    fn default() -> Self {
        Self {
            direction: "LR".to_string(),
            prefix: "N".to_string(),
        }
    }
}

impl MermaidWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flow direction of the chart (`LR`, `TD`, `RL`, `BT`)
    pub fn direction<S>(mut self, direction: S) -> Self
    where
        S: Into<String>,
    {
        self.direction = direction.into();
        self
    }

    /// Set the prefix of a node (`N` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Renders the graph into a string
    pub fn render<G>(&self, graph: &G) -> String
    where
        G: AdjacencyList,
        G::Id: Display,
        G::Value: Display,
        G::EdgeProp: Display,
    {
        let prefix = &self.prefix;
        let arrow = if graph.is_directed() { "-->" } else { "---" };

        let nodes = graph.ordered_vertices().into_iter().filter_map(|u| {
            let value = graph.value_of(&u)?;
            Some(format!("  {prefix}{u}[\"{}\"]", escape(value)))
        });

        let edges = graph
            .edges()
            .sorted_by(|a, b| a.endpoints().cmp(&b.endpoints()))
            .dedup_by(|a, b| a.endpoints() == b.endpoints())
            .map(|Edge(u, v, p)| format!("  {prefix}{u} {arrow}|{}| {prefix}{v}", escape(p)));

        let mut out = std::iter::once(format!("graph {}", self.direction))
            .chain(nodes)
            .chain(std::iter::once(String::new()))
            .chain(edges)
            .join("\n");
        out.push('\n');
        out
    }
}

/// Replaces characters that would terminate a Mermaid label
fn escape<D: Display>(value: D) -> String {
    value
        .to_string()
        .replace('"', "#quot;")
        .replace('|', "#124;")
}

impl<G> GraphWriter<G> for MermaidWriter
where
    G: AdjacencyList,
    G::Id: Display,
    G::Value: Display,
    G::EdgeProp: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(self.render(graph).as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn undirected_pairs_once() {
        let mut graph: Graph<&str, u32, &str> = Graph::undirected();
        graph.add_node_with(2, "b");
        graph.add_node_with(1, "a");
        graph.add_edge(2, 1, "x");
        graph.add_edge(1, 2, "y");
        graph.add_edge(3, 3, "loop");

        let text = MermaidWriter::new()
            .direction("TD")
            .node_prefix("v")
            .render(&graph);

        assert_eq!(
            text,
            "graph TD\n  v1[\"a\"]\n  v2[\"b\"]\n  v3[\"\"]\n\n  v1 ---|x| v2\n  v3 ---|loop| v3\n"
        );
    }

    #[test]
    fn labels_are_escaped() {
        let mut graph: Graph<String, u8, String> = Graph::directed();
        graph.add_node_with(0, "say \"hi\"".into());
        graph.add_edge(0, 0, "a|b".into());

        let text = graph.to_mermaid();
        assert!(text.contains("N0[\"say #quot;hi#quot;\"]"));
        assert!(text.contains("N0 -->|a#124;b| N0"));
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<u8, u8, u8> = Graph::directed();
        assert_eq!(graph.to_mermaid(), "graph LR\n\n");
    }
}
