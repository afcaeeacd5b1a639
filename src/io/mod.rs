/*!
# IO

Utilities for reading and writing flow problems from and to different file formats.
A flow problem is a [`FlowProblem`]: a network together with its source and sink.

## Formats

Currently supported formats:
- **Plain**: whitespace separated tokens `n m`, then `m` triples `u v c`, then `s t` with
  0-based vertices. This is the format of the `maxflow` binary.
- **Dimacs**: the DIMACS max-flow format with a header `p max n m`, terminal lines `n id s|t`
  and arc lines `a u v c` with 1-based vertices.

Capacities are read as signed integers, so negative capacities are reported as invalid edges
instead of parse errors. Any error raised while building the network is returned as an
[`ErrorKind::InvalidData`] IO error.

## Traits

To generalize over reading/writing:
- [`ProblemReader`] and [`ProblemWriter`] are implemented by readers and writers for a specific format.
- [`FlowProblem::try_from_reader`] and [`FlowProblem::try_write_to_writer`] dispatch on a given [`FileFormat`].
*/

pub mod dimacs;
pub mod header;
pub mod plain;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::{algo::*, prelude::*};

pub use dimacs::*;
pub use header::*;
pub use plain::*;

/// Identifier for a flow problem file format.
///
/// Used in [`FlowProblem::try_from_reader`] and [`FlowProblem::try_write_to_writer`] to
/// determine the correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `n m`, edge triples and terminals; 0-based
    Plain,
    /// DIMACS max-flow format; 1-based
    Dimacs,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(FileFormat::Plain),
            "dimacs" => Ok(FileFormat::Dimacs),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// A network together with the terminals a flow should be routed between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowProblem {
    /// The network, possibly already carrying flow
    pub network: FlowNetwork,
    /// Vertex the flow originates at
    pub source: Node,
    /// Vertex the flow is routed to
    pub sink: Node,
}

impl FlowProblem {
    /// Bundles a network with its terminals. The terminals are checked when solving.
    pub fn new(network: FlowNetwork, source: Node, sink: Node) -> Self {
        Self {
            network,
            source,
            sink,
        }
    }

    /// Routes a maximum flow and returns its value.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if a terminal is not a vertex of the network.
    pub fn solve(&mut self) -> std::result::Result<Flow, FlowError> {
        self.network.max_flow(self.source, self.sink)
    }

    /// Routes a maximum flow and returns its value together with a minimum cut.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if a terminal is not a vertex of the network.
    pub fn solve_with_cut(&mut self) -> std::result::Result<(Flow, MinCut), FlowError> {
        self.network.max_flow_min_cut(self.source, self.sink)
    }

    /// Reads a problem from the given reader according to the specified [`FileFormat`]
    /// using default reader settings.
    ///
    /// # Errors
    /// Returns an error if the input does not match the expected format or describes an
    /// invalid network.
    pub fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Plain => PlainReader::new().try_read_problem(reader),
            FileFormat::Dimacs => DimacsReader::new().try_read_problem(reader),
        }
    }

    /// Reads a problem from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are invalid.
    pub fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }

    /// Writes the problem to the given writer according to the specified [`FileFormat`].
    /// Original capacities are written, regardless of any flow in the network.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Plain => PlainWriter::new().try_write_problem(self, writer),
            FileFormat::Dimacs => DimacsWriter::new().try_write_problem(self, writer),
        }
    }

    /// Writes the problem to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    pub fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

/// Trait for types that can read flow problems in a specific format.
pub trait ProblemReader {
    /// Reads a problem from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a flow problem in
    /// the expected format.
    fn try_read_problem<R>(&self, reader: R) -> Result<FlowProblem>
    where
        R: BufRead;

    /// Reads a problem from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are invalid.
    fn try_read_problem_file<P>(&self, path: P) -> Result<FlowProblem>
    where
        P: AsRef<Path>,
    {
        self.try_read_problem(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write flow problems in a specific format.
pub trait ProblemWriter {
    /// Writes the problem to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_problem<W>(&self, problem: &FlowProblem, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the problem to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_problem_file<P>(&self, problem: &FlowProblem, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_problem(problem, BufWriter::new(File::create(path)?))
    }
}

/// Maps a vertex read from input to `0..n`, rejecting ids below the index base.
fn shift_node(node: Node, index_base: Node, name: &str) -> Result<Node> {
    node.checked_sub(index_base).ok_or_else(|| {
        io_error!(
            ErrorKind::InvalidData,
            format!("{name} {node} is smaller than the index base {index_base}")
        )
    })
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next().ok_or_else(|| {
            io_error!(
                std::io::ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name)
            )
        })?;

        next.parse().map_err(|_| {
            io_error!(
                std::io::ErrorKind::InvalidData,
                format!("Invalid value `{}` found. Cannot parse {}.", next, $name)
            )
        })?
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
