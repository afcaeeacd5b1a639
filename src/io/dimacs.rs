//! # Dimacs
//!
//! The DIMACS max-flow format consists of a header `p max n m`, two terminal lines
//! `n {id} s` and `n {id} t` and `m` arc lines `a u v c`, describing an edge `u -> v` with
//! capacity `c`. Lines starting with `c` are comments. Vertices are 1-based.
//!
//! Terminal and arc lines may appear in any order after the header.

use super::*;

/// A ProblemReader for the DIMACS max-flow format
#[derive(Debug, Clone)]
pub struct DimacsReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Vertex id that is mapped to node `0`
    index_base: Node,
}

impl Default for DimacsReader {
    fn default() -> Self {
        Self {
            header: Header::new_problem("max"),
            comment_identifier: "c".to_string(),
            index_base: 1,
        }
    }
}

impl DimacsReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> DimacsReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> DimacsReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the index base, i.e. the id of the first vertex in the input
    pub fn index_base(mut self, base: Node) -> DimacsReader {
        self.index_base = base;
        self
    }

    fn is_skipped(&self, line: &str) -> bool {
        let line = line.trim_start();
        line.is_empty() || line.starts_with(self.comment_identifier.as_str())
    }
}

impl ProblemReader for DimacsReader {
    fn try_read_problem<R: BufRead>(&self, reader: R) -> Result<FlowProblem> {
        let mut lines = reader.lines();

        let header = loop {
            match lines.next() {
                None => return Err(io_error!(ErrorKind::NotFound, "Header not found")),
                Some(line) => {
                    let line = line?;
                    if !self.is_skipped(&line) {
                        break line;
                    }
                }
            }
        };
        let (n, m) = self.header.parse_header(&header)?;

        let mut network = FlowNetwork::new(n);
        let mut source = None;
        let mut sink = None;

        for line in lines {
            let line = line?;
            if self.is_skipped(&line) {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("a") => {
                    raise_error_unless!(
                        network.number_of_edges() < m,
                        ErrorKind::InvalidData,
                        format!("More than the announced {m} arcs found")
                    );

                    let u = shift_node(parse_next_value!(parts, "Tail"), self.index_base, "Tail")?;
                    let v = shift_node(parse_next_value!(parts, "Head"), self.index_base, "Head")?;
                    let c: i64 = parse_next_value!(parts, "Capacity");

                    network.add_edge(u, v, c)?;
                }
                Some("n") => {
                    let id = shift_node(
                        parse_next_value!(parts, "Terminal"),
                        self.index_base,
                        "Terminal",
                    )?;
                    let terminal = match parts.next() {
                        Some("s") => &mut source,
                        Some("t") => &mut sink,
                        _ => {
                            return Err(io_error!(
                                ErrorKind::InvalidData,
                                format!("Invalid terminal line `{line}`")
                            ));
                        }
                    };
                    raise_error_unless!(
                        terminal.replace(id).is_none(),
                        ErrorKind::InvalidData,
                        format!("Terminal defined twice in `{line}`")
                    );
                }
                _ => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Unknown line `{line}`")
                    ));
                }
            }

            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Unexpected tokens in `{line}`")
            );
        }

        raise_error_unless!(
            network.number_of_edges() == m,
            ErrorKind::InvalidData,
            format!(
                "Expected {m} arcs, found {}",
                network.number_of_edges()
            )
        );

        match (source, sink) {
            (Some(source), Some(sink)) => Ok(FlowProblem::new(network, source, sink)),
            _ => Err(io_error!(
                ErrorKind::InvalidData,
                "Source or sink not defined"
            )),
        }
    }
}

/// A writer for the DIMACS max-flow format
#[derive(Debug, Clone)]
pub struct DimacsWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for DimacsWriter {
    fn default() -> Self {
        Self {
            header: Header::new_problem("max"),
        }
    }
}

impl DimacsWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> DimacsWriter {
        self.header = format;
        self
    }
}

impl ProblemWriter for DimacsWriter {
    fn try_write_problem<W: Write>(&self, problem: &FlowProblem, mut writer: W) -> Result<()> {
        let network = &problem.network;

        self.header.write_header(
            &mut writer,
            network.number_of_nodes(),
            network.number_of_edges(),
        )?;

        writeln!(writer, "n {} s", problem.source + 1)?;
        writeln!(writer, "n {} t", problem.sink + 1)?;

        for (u, v, c) in network.edges() {
            writeln!(writer, "a {} {} {c}", u + 1, v + 1)?;
        }

        writer.flush()
    }
}
