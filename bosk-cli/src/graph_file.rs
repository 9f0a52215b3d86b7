//! Line-based graph description parsing.
//!
//! The format is line-oriented: the first line carries the vertex count
//! `V`, the next `V` lines carry vertex names (one per line, surrounding
//! whitespace trimmed), and every remaining non-blank line is an edge of
//! the form `name1 name2 weight`, separated by whitespace. Blank lines are
//! ignored throughout, and every rejection carries the 1-based line number
//! it was found on.

use std::io::BufRead;

use bosk_core::{Graph, GraphError};
use thiserror::Error;

/// Errors raised while parsing a graph description.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphFileError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// 1-based number of the line being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The description ended before the expected content.
    #[error("file ended before line {line}: expected {expected}")]
    Truncated {
        /// 1-based number of the line that should have existed.
        line: usize,
        /// Description of the missing content.
        expected: &'static str,
    },
    /// The vertex count line did not parse as a non-negative integer.
    #[error("line {line}: invalid vertex count `{raw}`")]
    InvalidVertexCount {
        /// 1-based number of the offending line.
        line: usize,
        /// Raw line content.
        raw: String,
    },
    /// A vertex name was declared twice.
    #[error("line {line}: vertex `{name}` is already declared")]
    DuplicateVertexName {
        /// 1-based number of the offending line.
        line: usize,
        /// Name that appeared twice.
        name: String,
    },
    /// An edge line did not have the `name1 name2 weight` shape.
    #[error("line {line}: expected `name1 name2 weight`, got `{raw}`")]
    MalformedEdge {
        /// 1-based number of the offending line.
        line: usize,
        /// Raw line content.
        raw: String,
    },
    /// An edge referenced a vertex name that was never declared.
    #[error("line {line}: unknown vertex `{name}`")]
    UnknownVertexName {
        /// 1-based number of the offending line.
        line: usize,
        /// Name that failed to resolve.
        name: String,
    },
    /// An edge weight did not parse as a finite number.
    #[error("line {line}: invalid weight `{raw}`")]
    InvalidWeight {
        /// 1-based number of the offending line.
        line: usize,
        /// Raw weight token.
        raw: String,
    },
    /// The assembled description failed graph validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses a graph description from `reader`.
///
/// # Errors
/// Returns [`GraphFileError`] when reading fails or the description is
/// malformed; every parse rejection names the offending line.
///
/// # Examples
/// ```
/// use bosk_cli::graph_file::parse_graph;
///
/// let description = "3\nA\nB\nC\nA B 1.0\nB C 2.0\n";
/// let graph = parse_graph(description.as_bytes()).expect("description is valid");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub fn parse_graph(reader: impl BufRead) -> Result<Graph, GraphFileError> {
    let mut lines = ContentLines::new(reader);

    let (count_line, raw_count) =
        lines
            .next_content()?
            .ok_or_else(|| GraphFileError::Truncated {
                line: lines.next_line_number(),
                expected: "a vertex count",
            })?;
    let vertex_count: usize =
        raw_count
            .parse()
            .map_err(|_| GraphFileError::InvalidVertexCount {
                line: count_line,
                raw: raw_count.clone(),
            })?;

    let mut builder = Graph::builder();
    for _ in 0..vertex_count {
        let (line, name) = lines
            .next_content()?
            .ok_or_else(|| GraphFileError::Truncated {
                line: lines.next_line_number(),
                expected: "a vertex name",
            })?;
        if builder.vertex_id(&name).is_some() {
            return Err(GraphFileError::DuplicateVertexName { line, name });
        }
        builder.add_vertex(name);
    }

    while let Some((line, raw)) = lines.next_content()? {
        let mut parts = raw.split_whitespace();
        let (Some(first), Some(second), Some(third), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(GraphFileError::MalformedEdge { line, raw });
        };

        let source = builder
            .vertex_id(first)
            .ok_or_else(|| GraphFileError::UnknownVertexName {
                line,
                name: first.to_owned(),
            })?;
        let target = builder
            .vertex_id(second)
            .ok_or_else(|| GraphFileError::UnknownVertexName {
                line,
                name: second.to_owned(),
            })?;
        let weight = parse_finite_weight(third).ok_or_else(|| GraphFileError::InvalidWeight {
            line,
            raw: third.to_owned(),
        })?;
        builder.add_edge(source, target, weight);
    }

    Ok(builder.build()?)
}

/// Parses a weight token, rejecting NaN and infinities. `f32::from_str`
/// accepts them, so parsing alone is not enough.
fn parse_finite_weight(raw: &str) -> Option<f32> {
    raw.parse::<f32>().ok().filter(|weight| weight.is_finite())
}

/// Line reader that skips blank lines and tracks 1-based line numbers.
struct ContentLines<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Next non-blank line, trimmed, with its line number. `None` at end of
    /// input.
    fn next_content(&mut self) -> Result<Option<(usize, String)>, GraphFileError> {
        for result in self.lines.by_ref() {
            self.line += 1;
            let raw = result.map_err(|source| GraphFileError::Io {
                line: self.line,
                source,
            })?;
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line, trimmed.to_owned())));
            }
        }
        Ok(None)
    }

    /// Number the next line would carry, used to report truncation.
    fn next_line_number(&self) -> usize {
        self.line + 1
    }
}
