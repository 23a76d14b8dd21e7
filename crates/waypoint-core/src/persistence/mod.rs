//! Text persistence for graphs
//!
//! One line per node, in ascending ID order:
//!
//! ```text
//! ID: 0 Val: {0, 0} Edges: (1, {1, 0}, 2.5)
//! ID: 1 Val: {1, 0} Edges:
//! ```
//!
//! Loading creates nodes on demand, so an edge may name a node whose own
//! line comes later (or never appears).

pub mod parse;

use std::fmt::Display;
use std::fs::{self, File};
use std::hash::Hash;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Violation};
use parse::{parse_line, LineRecord};

/// How a load reacts to malformed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadMode {
    /// Any malformed line fails the load and leaves the graph untouched
    #[default]
    Strict,
    /// Malformed lines are skipped and reported
    SkipMalformed,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Strict => "strict",
            LoadMode::SkipMalformed => "skip-malformed",
        }
    }
}

impl FromStr for LoadMode {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "strict" => Ok(LoadMode::Strict),
            "skip-malformed" | "lenient" => Ok(LoadMode::SkipMalformed),
            _ => Err(GraphError::invalid_value("load mode", s)),
        }
    }
}

/// A line that was skipped during a lenient load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub reason: String,
}

/// Summary of a completed load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub lines_read: usize,
    pub nodes_created: usize,
    pub edges_added: usize,
    pub errors: Vec<LineError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<T> Graph<T>
where
    T: Display,
{
    /// Write every node as one line of the text format.
    ///
    /// An edge to a node that no longer exists has no value to write, so a
    /// graph with dangling edges is refused with `ValidityViolation` before
    /// anything is written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let dangling: Vec<Violation> = self
            .nodes()
            .flat_map(|node| {
                node.edges()
                    .iter()
                    .filter(|edge| !self.does_node_exist(edge.target))
                    .map(move |edge| Violation::DanglingEdge {
                        from: node.id(),
                        to: edge.target,
                    })
            })
            .collect();
        if !dangling.is_empty() {
            return Err(GraphError::ValidityViolation {
                violations: dangling,
            });
        }

        for node in self.nodes() {
            write!(writer, "ID: {} Val: {} Edges: ", node.id(), node.value())?;
            for edge in node.edges() {
                if let Some(target) = self.node(edge.target) {
                    write!(
                        writer,
                        "({}, {}, {}) ",
                        edge.target,
                        target.value(),
                        edge.weight
                    )?;
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Render the whole graph in the text format
    pub fn to_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| GraphError::Other(e.to_string()))
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| GraphError::io_operation("create directory", parent.display(), e))?;
        }

        let file = File::create(path)
            .map_err(|e| GraphError::io_operation("create", path.display(), e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;

        tracing::debug!(nodes = self.len(), edges = self.edge_count(), "graph saved");
        Ok(())
    }
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + FromStr,
    T::Err: Display,
{
    /// Load text into this graph in strict mode
    pub fn load_from_str(&mut self, text: &str) -> Result<LoadReport> {
        self.load_from_str_with_mode(text, LoadMode::Strict)
    }

    pub fn load_from_str_with_mode(&mut self, text: &str, mode: LoadMode) -> Result<LoadReport> {
        self.read_from(text.as_bytes(), mode)
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn load_from_file(&mut self, path: &Path, mode: LoadMode) -> Result<LoadReport> {
        let file =
            File::open(path).map_err(|e| GraphError::io_operation("open", path.display(), e))?;
        self.read_from(BufReader::new(file), mode)
    }

    /// Build a fresh graph from a file
    pub fn from_file(path: &Path, mode: LoadMode) -> Result<(Self, LoadReport)> {
        let mut graph = Graph::new();
        let report = graph.load_from_file(path, mode)?;
        Ok((graph, report))
    }

    /// Read the text format line by line and merge it into this graph.
    ///
    /// In `Strict` mode every line is parsed before the graph is touched, so
    /// a parse error leaves the graph exactly as it was.
    pub fn read_from<R: Read>(&mut self, reader: R, mode: LoadMode) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut records = Vec::new();

        let mut reader = BufReader::new(reader);
        let mut buffer = Vec::new();
        let mut number = 0;

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            number += 1;
            report.lines_read = number;

            let parsed = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_line::<T>(number, line.trim_end_matches(['\n', '\r'])),
                Err(e) => Err(GraphError::parse(number, format!("line is not valid UTF-8: {}", e))),
            };

            match parsed {
                Ok(record) => records.push(record),
                Err(GraphError::Parse { line, reason }) if mode == LoadMode::SkipMalformed => {
                    tracing::debug!(line, %reason, "skipping malformed line");
                    report.errors.push(LineError { line, reason });
                }
                Err(e) => return Err(e),
            }
        }

        for record in records {
            self.apply_record(record, &mut report);
        }

        if !report.is_clean() {
            tracing::warn!(skipped = report.errors.len(), "load skipped malformed lines");
        }
        tracing::debug!(
            nodes_created = report.nodes_created,
            edges_added = report.edges_added,
            "graph loaded"
        );
        Ok(report)
    }

    fn apply_record(&mut self, record: LineRecord<T>, report: &mut LoadReport) {
        if self.ensure_node(record.id, &record.value) {
            report.nodes_created += 1;
        } else if self.node(record.id).is_some_and(|n| *n.value() != record.value) {
            tracing::debug!(
                line = record.line,
                id = record.id,
                "line value differs from existing node; keeping existing"
            );
        }

        for edge in record.edges {
            if self.ensure_node(edge.target, &edge.value) {
                report.nodes_created += 1;
            }
            // Both endpoints exist at this point
            if let Some(node) = self.node_mut(record.id) {
                node.add_edge(edge.target, edge.weight);
                report.edges_added += 1;
            }
        }
    }
}

/// Parse text into a new graph (strict)
pub fn parse_graph<T>(text: &str) -> Result<Graph<T>>
where
    T: Clone + Eq + Hash + FromStr,
    T::Err: Display,
{
    let mut graph = Graph::new();
    graph.load_from_str(text)?;
    Ok(graph)
}

/// Write a graph to stdout
pub fn print_graph<T: Display>(graph: &Graph<T>) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    graph.write_to(&mut lock)
}

#[cfg(test)]
mod tests;
