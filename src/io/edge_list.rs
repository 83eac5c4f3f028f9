//! # EdgeList
//!
//! The EdgeList-Format consists of an [`EdgeListHeader`] followed by `A` lines
//! `origin destination [weight]`, each representing the edge `(origin, destination)`.
//! The weight column is only read if the header marks the graph as weighted and defaults
//! to `1` if absent.
//!
//! By default, malformed edge lines (too short, unparsable or referencing a vertex outside of
//! `0..V`) are skipped with a warning and loading continues. A strict reader turns them into
//! errors instead. A missing or malformed header is always an error.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Lines, Write},
    path::Path,
};

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Malformed edge lines are errors instead of being skipped
    strict: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            strict: false,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// If *true*, malformed edge lines abort loading with `GraphError::Parse`
    pub fn strict(mut self, strict: bool) -> EdgeListReader {
        self.strict = strict;
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader =
            EdgeListEdgesReader::try_new(reader, &self.comment_identifier, self.strict)?;
        let header = edges_reader.header();

        let edges = edges_reader.by_ref().collect::<Result<Vec<_>>>()?;
        edges_reader.log_trailing_lines()?;

        debug!(
            vertices = header.vertices,
            declared = header.edges,
            loaded = edges.len(),
            skipped = edges_reader.skipped(),
            "loaded edge list"
        );

        G::from_edges(header.vertices, header.directed, header.weighted, edges)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    ///
    /// # Errors
    /// Fails if the header is missing or malformed or if reading fails.
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    ///
    /// # Errors
    /// Fails if the file cannot be opened, the header is missing or malformed or if reading fails.
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Consumes the reader and yields the edges announced by the header.
///
/// Comment lines are skipped without counting towards `A`. Every other line counts, including
/// blank lines, which are skipped silently, and malformed lines, whether they are rejected or not.
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of the last line returned by `lines` (1-based)
    line_number: usize,
    /// Parsed header
    header: EdgeListHeader,
    /// Number of edge lines not yet consumed
    remaining: NumEdges,
    /// Number of edge lines that were skipped
    skipped: usize,
    /// Comment identifier
    comment_identifier: &'a str,
    /// Malformed lines are errors
    strict: bool,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    ///
    /// # Errors
    /// Returns `GraphError::Parse` if no header is found or it cannot be parsed.
    pub fn try_new(reader: R, comment_identifier: &'a str, strict: bool) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            header: EdgeListHeader {
                vertices: 0,
                edges: 0,
                directed: false,
                weighted: false,
            },
            remaining: 0,
            skipped: 0,
            comment_identifier,
            strict,
        };

        let line = edge_list_reader
            .next_line(true)?
            .ok_or_else(|| parse_error!(edge_list_reader.line_number, "header not found"))?;
        edge_list_reader.header = EdgeListHeader::parse(&line, edge_list_reader.line_number)?;
        edge_list_reader.remaining = edge_list_reader.header.edges;

        Ok(edge_list_reader)
    }

    /// Returns the parsed header
    pub fn header(&self) -> EdgeListHeader {
        self.header
    }

    /// Returns the number of edge lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns the next line that is not a comment (and not blank if `skip_blank` is set)
    /// if it exists or propagates an error
    fn next_line(&mut self, skip_blank: bool) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if (skip_blank && trimmed.is_empty()) || trimmed.starts_with(self.comment_identifier) {
                continue;
            }
            return Ok(Some(line));
        }
        Ok(None)
    }

    /// Tries to parse a weighted edge from a single line
    fn parse_edge_line(&self, line: &str) -> Result<WeightedEdge> {
        let line_number = self.line_number;
        let tokens: SmallVec<[&str; 3]> = line.split_whitespace().take(3).collect();
        let mut parts = tokens.iter().copied();

        let origin: Node = parse_next_value!(parts, line_number, "origin");
        let destination: Node = parse_next_value!(parts, line_number, "destination");

        let n = self.header.vertices;
        raise_error_unless!(
            origin < n && destination < n,
            line_number,
            "edge ({origin},{destination}) references a vertex outside of 0..{n}"
        );

        let weight = match parts.next() {
            Some(token) if self.header.weighted => {
                let weight: Weight = token
                    .parse()
                    .map_err(|_| parse_error!(line_number, "cannot parse weight from {token:?}"))?;
                raise_error_unless!(
                    weight.is_finite(),
                    line_number,
                    "weight {weight} is not finite"
                );
                weight
            }
            _ => DEFAULT_WEIGHT,
        };

        Ok(WeightedEdge::new(origin, destination, weight))
    }

    /// Reports content lines after the last announced edge line
    fn log_trailing_lines(&mut self) -> Result<()> {
        let mut trailing = 0;
        while self.next_line(true)?.is_some() {
            trailing += 1;
        }
        if trailing > 0 {
            debug!(trailing, "ignoring lines after the announced edges");
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let line = match self.next_line(false) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    warn!(
                        missing = self.remaining,
                        "edge list ended before all announced edges were read"
                    );
                    self.remaining = 0;
                    return None;
                }
                Err(e) => return Some(Err(e)),
            };
            self.remaining -= 1;

            if line.trim().is_empty() {
                continue;
            }

            match self.parse_edge_line(&line) {
                Ok(edge) => return Some(Ok(edge)),
                Err(e) if self.strict => return Some(Err(e)),
                Err(e) => {
                    warn!("skipping edge line: {e}");
                    self.skipped += 1;
                }
            }
        }
        None
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        EdgeListHeader::of(graph).write(&mut writer)?;

        for e in graph.edges() {
            if graph.is_weighted() {
                writeln!(writer, "{} {} {}", e.origin, e.destination, e.weight)?;
            } else {
                writeln!(writer, "{} {}", e.origin, e.destination)?;
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    ///
    /// # Errors
    /// Returns `GraphError::Io` if writing fails.
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be created or writing fails.
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::fixtures::five_vertices;

    const FIVE_VERTICES: &str = "\
# five vertices, five undirected weighted edges
5 5 0 1
0 1 3
0 2 5
# comments do not count as edge lines
1 3 2
2 4 1
3 4 4
";

    #[test]
    fn read_five_vertices() {
        let graph = AdjMatrix::try_read_edge_list(FIVE_VERTICES.as_bytes()).unwrap();
        let expected: AdjMatrix = five_vertices();

        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.ordered_edges(), expected.ordered_edges());
        assert!(graph.is_weighted() && graph.is_undirected());
        assert_eq!(graph.weight(4, 3), 4.0);
        assert_eq!(graph.label_of(2), Some("2"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let input = "4 6 1 1\n0 1 2.5\n0\nx 2\n1 9\n2 3\n3 0 abc\n3 1\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();

        assert!(graph.is_directed());
        assert_eq!(
            graph.ordered_edges(),
            vec![
                WeightedEdge::new(0, 1, 2.5),
                WeightedEdge::new(2, 3, DEFAULT_WEIGHT)
            ]
        );

        let strict = EdgeListReader::new().strict(true);
        let err = GraphReader::<AdjList>::try_read_graph(&strict, input.as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn weights_only_for_weighted_graphs() {
        let input = "3 2 0 0\n0 1 7\n1 2\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert!(!graph.is_weighted());
        assert!(graph.edges().all(|e| e.weight == DEFAULT_WEIGHT));

        let input = "3 2 0 1\n0 1 7\n1 2\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.weight(1, 0), 7.0);
        assert_eq!(graph.weight(2, 1), DEFAULT_WEIGHT);
    }

    #[test]
    fn header_errors() {
        for input in ["", "# only a comment\n\n", "3 2 0\n0 1\n"] {
            let err = AdjList::try_read_edge_list(input.as_bytes()).unwrap_err();
            assert!(matches!(err, GraphError::Parse { .. }), "{input:?}");
        }
    }

    #[test]
    fn blank_lines_count_as_edge_lines() {
        let input = "3 2 0 0\n0 1\n\n1 2\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 2));

        let strict = EdgeListReader::new().strict(true);
        let graph: AdjList = strict.try_read_graph(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let input = "\n# leading blank and comment lines\n3 2 0 0\n# free\n0 1\n1 2\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn announced_edge_count_limits_reading() {
        let input = "3 1 0 0\n0 1\n1 2\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);

        let input = "3 5 0 0\n0 1\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn write_and_read_back() {
        let graph: MirroredGraph = five_vertices();
        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "5 5 0 1\n0 1 3\n0 2 5\n1 3 2\n2 4 1\n3 4 4\n");

        let read = MirroredGraph::try_read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(read.ordered_edges(), graph.ordered_edges());

        let unweighted = AdjList::from_edges(3, true, false, [(2, 0), (0, 1)]).unwrap();
        let mut buffer = Vec::new();
        unweighted.try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3 2 1 0\n0 1\n2 0\n");
    }

    #[test]
    fn file_helpers() {
        let path = std::env::temp_dir().join(format!("wgraphs-{}.txt", std::process::id()));
        let graph: AdjList = five_vertices();
        graph.try_write_edge_list_file(&path).unwrap();

        let read = AdjList::try_read_edge_list_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read.ordered_edges(), graph.ordered_edges());

        assert!(matches!(
            AdjList::try_read_edge_list_file(&path),
            Err(GraphError::Io(_))
        ));
    }
}
