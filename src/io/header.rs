//! # Header
//!
//! The header line of an edge-list file consists of four whitespace-separated integers
//! `V A D P`: the number of vertices, the number of edge lines that follow, and the
//! directed and weighted flags. Flags are read as integers where every non-zero value
//! means *true*. Further tokens on the header line are ignored.

use smallvec::SmallVec;

use super::*;

/// Parsed header of an edge-list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeListHeader {
    /// Number of vertices `V`
    pub vertices: NumNodes,
    /// Number of edge lines `A`
    pub edges: NumEdges,
    /// Directed flag `D`
    pub directed: bool,
    /// Weighted flag `P`
    pub weighted: bool,
}

impl EdgeListHeader {
    /// Creates the header describing `graph`, counting every canonical edge once
    pub fn of<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            vertices: graph.number_of_nodes(),
            edges: graph.edges().count() as NumEdges,
            directed: graph.is_directed(),
            weighted: graph.is_weighted(),
        }
    }

    /// Tries to parse the header from `line`, where `line_number` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `GraphError::Parse` if fewer than four tokens are present or a token is
    /// not a non-negative integer.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().take(4).collect();
        raise_error_unless!(
            tokens.len() == 4,
            line_number,
            "header requires `V A D P`, found {} token(s)",
            tokens.len()
        );

        let mut parts = tokens.into_iter();
        let vertices: NumNodes = parse_next_value!(parts, line_number, "number of vertices");
        let edges: NumEdges = parse_next_value!(parts, line_number, "number of edges");
        let directed: u64 = parse_next_value!(parts, line_number, "directed flag");
        let weighted: u64 = parse_next_value!(parts, line_number, "weighted flag");

        raise_error_unless!(
            vertices < INVALID_NODE,
            line_number,
            "too many vertices: {vertices}"
        );

        Ok(Self {
            vertices,
            edges,
            directed: directed != 0,
            weighted: weighted != 0,
        })
    }

    /// Writes the header line `V A D P`
    ///
    /// # Errors
    /// Returns `GraphError::Io` if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "{} {} {} {}",
            self.vertices,
            self.edges,
            u8::from(self.directed),
            u8::from(self.weighted)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header() {
        assert_eq!(
            EdgeListHeader::parse(" 5  4 0 1 ", 1).unwrap(),
            EdgeListHeader {
                vertices: 5,
                edges: 4,
                directed: false,
                weighted: true
            }
        );

        let header = EdgeListHeader::parse("3 0 2 0 trailing", 1).unwrap();
        assert!(header.directed);
        assert!(!header.weighted);
    }

    #[test]
    fn malformed_header() {
        for line in ["", "5 4 0", "five 4 0 1", "5 -1 0 1", "5 4 0 x"] {
            let err = EdgeListHeader::parse(line, 3).unwrap_err();
            assert!(matches!(err, GraphError::Parse { line: 3, .. }), "{line:?}");
        }
    }

    #[test]
    fn write_header() {
        let graph = AdjList::from_edges(3, false, false, [(0, 1), (1, 0), (2, 2)]).unwrap();
        let mut buffer = Vec::new();
        EdgeListHeader::of(&graph).write(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3 2 0 0\n");
    }
}
