//! # Plain
//!
//! The Plain-Format is a stream of whitespace separated integers: `n m`, followed by `m` triples
//! `u v c` describing an edge `u -> v` with capacity `c`, followed by the terminals `s t`.
//! Line breaks carry no meaning, but lines starting with the comment identifier are skipped.
//! Vertices are 0-based by default.

use std::io::Read;

use super::*;

/// A ProblemReader for the Plain-Format
#[derive(Debug, Clone)]
pub struct PlainReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Vertex id that is mapped to node `0`
    index_base: Node,
}

impl Default for PlainReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            index_base: 0,
        }
    }
}

impl PlainReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> PlainReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the index base, i.e. the id of the first vertex in the input
    pub fn index_base(mut self, base: Node) -> PlainReader {
        self.index_base = base;
        self
    }
}

impl ProblemReader for PlainReader {
    fn try_read_problem<R: BufRead>(&self, mut reader: R) -> Result<FlowProblem> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let mut tokens = input
            .lines()
            .filter(|line| !line.trim_start().starts_with(self.comment_identifier.as_str()))
            .flat_map(str::split_whitespace);

        let n: NumNodes = parse_next_value!(tokens, "Number of nodes");
        let m: NumEdges = parse_next_value!(tokens, "Number of edges");

        let mut network = FlowNetwork::new(n);
        for _ in 0..m {
            let u = shift_node(parse_next_value!(tokens, "Tail"), self.index_base, "Tail")?;
            let v = shift_node(parse_next_value!(tokens, "Head"), self.index_base, "Head")?;
            let c: i64 = parse_next_value!(tokens, "Capacity");

            network.add_edge(u, v, c)?;
        }

        let source = shift_node(parse_next_value!(tokens, "Source"), self.index_base, "Source")?;
        let sink = shift_node(parse_next_value!(tokens, "Sink"), self.index_base, "Sink")?;

        raise_error_unless!(
            tokens.next().is_none(),
            ErrorKind::InvalidData,
            "Unexpected tokens after the terminals"
        );

        Ok(FlowProblem::new(network, source, sink))
    }
}

/// A writer for the Plain-Format
#[derive(Debug, Clone, Default)]
pub struct PlainWriter {
    /// Vertex id node `0` is written as
    index_base: Node,
}

impl PlainWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the index base, i.e. the id node `0` is written as
    pub fn index_base(mut self, base: Node) -> PlainWriter {
        self.index_base = base;
        self
    }
}

impl ProblemWriter for PlainWriter {
    fn try_write_problem<W: Write>(&self, problem: &FlowProblem, mut writer: W) -> Result<()> {
        let network = &problem.network;
        let base = self.index_base;

        writeln!(
            writer,
            "{} {}",
            network.number_of_nodes(),
            network.number_of_edges()
        )?;
        for (u, v, c) in network.edges() {
            writeln!(writer, "{} {} {c}", u + base, v + base)?;
        }
        writeln!(writer, "{} {}", problem.source + base, problem.sink + base)?;

        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidEdgeReason;
    use itertools::Itertools;

    const WORKED_EXAMPLE: &str = "4 5\n0 1 3\n1 2 2\n0 2 2\n2 3 3\n1 3 2\n0 3\n";

    fn read(input: &str) -> Result<FlowProblem> {
        PlainReader::new().try_read_problem(input.as_bytes())
    }

    #[test]
    fn read_worked_example() {
        let mut problem = read(WORKED_EXAMPLE).unwrap();
        assert_eq!(problem.network.number_of_nodes(), 4);
        assert_eq!(problem.network.number_of_edges(), 5);
        assert_eq!((problem.source, problem.sink), (0, 3));
        assert_eq!(problem.solve(), Ok(5));
    }

    #[test]
    fn layout_and_comments() {
        let input = "# a comment\n4 5 0 1 3 1 2 2\n  # indented comment\n0 2 2 2 3\n3 1 3 2 0 3";
        let problem = read(input).unwrap();
        assert_eq!(problem, read(WORKED_EXAMPLE).unwrap());

        let problem = PlainReader::new()
            .comment_identifier("//")
            .index_base(1)
            .try_read_problem("// 1-based\n2 1\n1 2 7\n1 2\n".as_bytes())
            .unwrap();
        assert_eq!(problem.network.edges().collect_vec(), vec![(0, 1, 7)]);
        assert_eq!((problem.source, problem.sink), (0, 1));
    }

    #[test]
    fn malformed_input() {
        for input in [
            "",
            "4",
            "4 5\n0 1 3\n",
            "2 1\n0 1 x\n0 1\n",
            "2 1\n0 1 3\n0\n",
            "2 1\n0 1 3\n0 1 1\n",
            "2 1\n-1 1 3\n0 1\n",
        ] {
            assert_eq!(
                read(input).unwrap_err().kind(),
                ErrorKind::InvalidData,
                "{input:?}"
            );
        }

        // a 0 in 1-based input
        let err = PlainReader::new()
            .index_base(1)
            .try_read_problem("2 1\n0 1 3\n1 2\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn invalid_edges_are_reported() {
        let err = read("2 1\n0 1 -4\n0 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        let inner = err.into_inner().unwrap().downcast::<FlowError>().unwrap();
        assert_eq!(
            *inner,
            FlowError::InvalidEdge {
                u: 0,
                v: 1,
                reason: InvalidEdgeReason::NegativeCapacity(-4)
            }
        );

        assert!(read("2 1\n0 2 4\n0 1\n").is_err());
    }

    #[test]
    fn terminals_are_checked_when_solving() {
        let mut problem = read("2 1\n0 1 4\n0 5\n").unwrap();
        assert!(matches!(
            problem.solve(),
            Err(FlowError::InvalidEndpoint { node: 5, .. })
        ));
    }

    #[test]
    fn write_original_capacities() {
        let mut problem = read(WORKED_EXAMPLE).unwrap();
        problem.solve().unwrap();

        let mut buffer = Vec::new();
        PlainWriter::new()
            .try_write_problem(&problem, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), WORKED_EXAMPLE);
    }
}
