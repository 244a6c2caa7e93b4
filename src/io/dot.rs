//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and
//! (labelled) edges.
//!
//! For example, drawing a directed graph where the nodes of one side of a bipartition are colored
//! red can be achieved via
//! ```ignore
//! let dot_writer = DotWriter::default().edge_labels(true);
//! dot_writer.start_graph(&mut writer, true)?;
//! dot_writer.write_nodes(&mut writer, graph.vertices())?;
//! dot_writer.write_edges(&mut writer, graph.edges(), true, None)?;
//! dot_writer.color_nodes(&mut writer, left.iter(), DotColor::Red)?;
//! dot_writer.finish_graph(&mut writer)?;
//! ```
//!
//! Note that for nodes, the latest coloring is the one that will be applied in a visualizer,
//! whereas for edges, each new colored edge adds another edge to the graph. Use the inbuilt
//! `.filter()` method to selectively prevent drawing edges prematurely.
use std::{fmt::Display, io::Write};

use super::*;
use crate::edge::Edge;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Write edge properties as labels
    edge_labels: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            edge_labels: false,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, every edge is labelled with its property
    pub fn edge_labels(mut self, edge_labels: bool) -> Self {
        self.edge_labels = edge_labels;
        self
    }

    /// Set the prefix of a node (`u` by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original graph.
    pub fn node_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            edge_labels: self.edge_labels,
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the graph.
    /// Must know if the graph is undirected
    pub fn start_graph<W>(&self, writer: &mut W, directed: bool) -> Result<()>
    where
        W: Write,
    {
        let graph_name = if directed { "digraph" } else { "graph" };

        writeln!(writer, "{graph_name} {{")
    }

    /// Formats a node depending on `self.prefix`
    fn format_node<Id: Display>(&self, u: Id) -> String {
        format!("{}{u}", self.prefix)
    }

    /// Writes every node as a standalone statement so that isolated nodes are drawn as well
    pub fn write_nodes<W, I, Id>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Id>,
        Id: Display,
    {
        for u in nodes.into_iter() {
            write!(writer, "{};", self.format_node(u))?;
        }
        writeln!(writer)
    }

    /// Writes an iterator of edges to `writer`. Must know if the edges are directed and if they
    /// should be colored.
    pub fn write_edges<W, I, Id, P>(
        &self,
        writer: &mut W,
        edges: I,
        directed: bool,
        color: Option<DotColor>,
    ) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge<Id, P>>,
        Id: Display,
        P: Display,
    {
        let edge_dir = if directed { "->" } else { "--" };

        for Edge(u, v, p) in edges.into_iter() {
            let mut attributes = Vec::with_capacity(2);
            if self.edge_labels {
                attributes.push(format!("label=\"{}\"", p.to_string().replace('"', "\\\"")));
            }
            if let Some(c) = color {
                attributes.push(format!("color={c}"));
            }

            let attributes = if attributes.is_empty() {
                String::new()
            } else {
                format!("[{}]", attributes.join(", "))
            };

            write!(
                writer,
                "{}{edge_dir}{}{attributes};",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`.
    /// This method should only be needed when wanting to color additional nodes which is why
    /// `color` is not optional.
    pub fn color_nodes<W, I, Id>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Id>,
        Id: Display,
    {
        for u in nodes.into_iter() {
            write!(
                writer,
                "{}[style=filled, color={color}]",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
    G::Id: Display,
    G::EdgeProp: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        let directed = graph.is_directed();
        self.start_graph(&mut writer, directed)?;
        self.write_nodes(&mut writer, graph.ordered_vertices())?;
        self.write_edges(&mut writer, graph.edges(), directed, None)?;
        self.finish_graph(&mut writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the colors permitted in Svg-Dot, taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    Orange,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn directed_with_labels() {
        let graph: Graph<(), u32, u8> = Graph::from_edges(true, [(1, 2, 5), (2, 3, 6)]);

        let mut buffer = Vec::new();
        DotWriter::new()
            .edge_labels(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("digraph {\nu1;u2;u3;\n"));
        assert!(text.contains("u1->u2[label=\"5\"];"));
        assert!(text.contains("u2->u3[label=\"6\"];"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn undirected_colored() {
        let graph: Graph<(), u32, u8> = Graph::from_edges(false, [(2, 1, 0)]);
        let writer = DotWriter::new().node_prefix("v");

        let mut buffer = Vec::new();
        writer.start_graph(&mut buffer, false).unwrap();
        writer
            .write_edges(&mut buffer, graph.edges(), false, Some(DotColor::DarkGreen))
            .unwrap();
        writer
            .color_nodes(&mut buffer, [1u32], DotColor::Red)
            .unwrap();
        writer.finish_graph(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\nv1--v2[color=darkgreen];\nv1[style=filled, color=red]\n}\n"
        );
    }
}
