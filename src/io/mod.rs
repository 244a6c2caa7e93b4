/*!
# IO

Utilities for writing graphs in text formats meant for visualization and debugging.
None of the formats is meant to be parsed back.

## Output Formats

- **Mermaid**: a [Mermaid](https://mermaid.js.org/) flowchart with node payloads as labels and
  one arrow per connected pair of nodes, labelled with the edge property.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

Both formats render node identifiers with their [`Display`](std::fmt::Display) implementation
behind a configurable prefix, so identifiers should not contain spaces or special characters.

## Traits

- [`GraphWriter`] is implemented by writers for a specific format.
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod mermaid;

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::ops::*;

pub use dot::*;
pub use mermaid::*;

/// Identifier for a graph output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz
    Dot,
    /// Mermaid flowchart
    Mermaid,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(FileFormat::Dot),
            "mermaid" | "mmd" => Ok(FileFormat::Mermaid),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}"),
            )),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
///
/// Automatically implemented for every graph whose identifiers, payloads and edge properties
/// can be displayed.
pub trait GraphWrite {
    /// Writes the graph to the given writer in the default configuration of `format`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file in the default configuration of `format`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_to_writer(&mut writer, format)?;
        writer.flush()
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyList,
    G::Id: Display,
    G::Value: Display,
    G::EdgeProp: Display,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Dot => DotWriter::default().try_write_graph(self, writer),
            FileFormat::Mermaid => MermaidWriter::default().try_write_graph(self, writer),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn format_from_str() {
        assert_eq!("DOT".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!("mmd".parse::<FileFormat>().unwrap(), FileFormat::Mermaid);
        assert!("metis".parse::<FileFormat>().is_err());
    }

    #[test]
    fn write_by_format() {
        let graph: Graph<u8, u32, u8> = Graph::from_edges(false, [(1, 2, 7)]);

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::Mermaid)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), graph.to_mermaid());

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::Dot)
            .unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("graph {"));
    }
}
