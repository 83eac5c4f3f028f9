/*!
# IO

Reading and writing graphs in the edge-list format.

The first non-comment line is a header `V A D P` (number of vertices, number of edges,
directed flag, weighted flag), followed by `A` lines `origin destination [weight]`.
Vertices are numbered `0..V` and labelled by their index when loaded.

```text
# five vertices, five undirected weighted edges
5 5 0 1
0 1 3
0 2 5
1 3 2
2 4 1
3 4 4
```

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands using the default settings, including
  path-based helpers.
*/

pub mod edge_list;
pub mod header;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns `GraphError::Parse` if the input is not a valid representation
    /// of a graph in the expected format and `GraphError::Io` if reading fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for creating a `GraphError::Parse`
macro_rules! parse_error {
    ($line: expr, $($reason: tt)*) => {
        GraphError::Parse {
            line: $line,
            reason: format!($($reason)*),
        }
    };
}

/// Shorthand for returning a `GraphError::Parse` early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($reason: tt)*) => {
        if !($cond) {
            return Err(parse_error!($line, $($reason)*));
        }
    };
}

/// Tries to parse the next token of a line and returns a `GraphError::Parse` early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $line: expr, $name: expr) => {{
        let token = $iterator
            .next()
            .ok_or_else(|| parse_error!($line, "premature end of line when parsing {}", $name))?;

        token
            .parse()
            .map_err(|_| parse_error!($line, "cannot parse {} from {:?}", $name, token))?
    }};
}

use parse_error;
use parse_next_value;
use raise_error_unless;
