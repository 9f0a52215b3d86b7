//! The `run` subcommand: load a graph description, build its minimum
//! spanning tree, and summarise the result.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use bosk_core::{Graph, MstError, SpanningTree, minimum_spanning_tree};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::graph_file::{GraphFileError, parse_graph};

/// Top-level argument parser for the `bosk` binary.
#[derive(Debug, Parser, Clone)]
#[command(name = "bosk", about = "Compute minimum spanning trees of weighted graphs.")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands understood by the binary.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph description and print its minimum spanning tree.
    Run(RunCommand),
}

/// Arguments for `bosk run`.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph description to load.
    pub path: PathBuf,

    /// Report the graph under this name instead of the file stem.
    #[arg(long)]
    pub name: Option<String>,
}

/// Everything `run` produced, kept so rendering can happen elsewhere.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name the graph is reported under.
    pub graph_name: String,
    /// Parsed input graph; arcs are rendered by vertex name.
    pub graph: Graph,
    /// Accepted spanning tree.
    pub tree: SpanningTree,
}

/// Failures surfaced by the command layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph description could not be opened.
    #[error("cannot open `{path}`: {source}")]
    Open {
        /// Path the command tried to open.
        path: PathBuf,
        /// Operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph description could not be parsed.
    #[error(transparent)]
    GraphFile(#[from] GraphFileError),
    /// Tree construction rejected the graph.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Stable machine-readable code for failures that define one.
    #[must_use]
    pub fn stable_code(&self) -> Option<&'static str> {
        match self {
            Self::Mst(error) => Some(error.code().as_str()),
            Self::GraphFile(GraphFileError::Graph(error)) => Some(error.code().as_str()),
            Self::GraphFile(_) | Self::Open { .. } => None,
        }
    }
}

/// Runs the parsed command line to completion.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or holds no
/// spanning tree.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use bosk_cli::cli::{Cli, Command, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("mesh.graph");
/// std::fs::write(&path, "4\nnw\nne\nsw\nse\nnw ne 1.0\nnw sw 4.0\nne se 2.0\nsw se 0.5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand { path, name: None }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.len(), 3);
/// assert_eq!(summary.tree.total_weight(), 3.5);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(args) => run(args),
    }
}

#[instrument(
    name = "bosk.run",
    err,
    skip(args),
    fields(path = %args.path.display(), graph = field::Empty),
)]
fn run(args: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, name } = args;
    let label = graph_label(&path, name);
    Span::current().record("graph", field::display(&label));

    let file = File::open(&path).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
    })?;
    let graph = parse_graph(BufReader::new(file))?;
    let tree = minimum_spanning_tree(&graph)?;

    info!(
        graph = label.as_str(),
        arcs = tree.len(),
        total_weight = tree.total_weight(),
        "run complete"
    );
    Ok(ExecutionSummary {
        graph_name: label,
        graph,
        tree,
    })
}

/// The graph is reported under the override name when given, otherwise the
/// file stem, otherwise a placeholder.
pub(super) fn graph_label(path: &Path, override_name: Option<String>) -> String {
    override_name.unwrap_or_else(|| {
        path.file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("graph")
            .to_owned()
    })
}

/// Writes one line per accepted arc and a closing summary line to `writer`.
///
/// # Errors
/// Returns [`io::Error`] when the writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use bosk_cli::cli::{ExecutionSummary, render_summary};
/// # use bosk_core::{Graph, minimum_spanning_tree};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut builder = Graph::builder();
/// let hub = builder.add_vertex("hub");
/// let leaf = builder.add_vertex("leaf");
/// builder.add_edge(hub, leaf, 2.5);
/// let graph = builder.build()?;
/// let tree = minimum_spanning_tree(&graph)?;
/// let summary = ExecutionSummary {
///     graph_name: "pair".into(),
///     graph,
///     tree,
/// };
/// let mut out = Vec::new();
/// render_summary(&summary, &mut out)?;
/// assert_eq!(
///     String::from_utf8(out)?,
///     "graph: pair\nhub -- leaf  2.5\n1 arcs, total weight 2.5\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_name)?;
    for arc in summary.tree.arcs() {
        writeln!(
            writer,
            "{} -- {}  {}",
            summary.graph.name(arc.source()),
            summary.graph.name(arc.target()),
            arc.weight()
        )?;
    }
    writeln!(
        writer,
        "{} arcs, total weight {}",
        summary.tree.len(),
        summary.tree.total_weight()
    )?;
    Ok(())
}
