//! Loading graphs from the whitespace-delimited text format.
//!
//! The first token is the vertex count `n`. It is followed by edges, either
//! as pairs `u v` ([`Format::Unweighted`]) or as triples `u v weight`
//! ([`Format::Weighted`]). Any ASCII whitespace separates tokens, so the
//! layout of lines does not matter:
//!
//! ```text
//! 4
//! 0 1
//! 1 2 2 3
//! ```
//!
//! A load either returns a complete graph or an error. There is no partially
//! loaded state: the graph is built aside and handed out only after the whole
//! input was consumed. A vertex count whose storage cannot be allocated is an
//! [`InvalidVertexCount`](LoadError::InvalidVertexCount) error.
//!
//! Readers are consumed as bytes. A token that is not valid UTF-8 is reported
//! as [`MalformedToken`](LoadError::MalformedToken), with invalid sequences
//! replaced by `U+FFFD`.
//!
//! # Examples
//!
//! ```
//! use ugraph::load::Loader;
//!
//! let graph = Loader::weighted().load_str("2\n0 1 2.5\n").unwrap();
//!
//! assert_eq!(graph.weight(1, 0), Ok(Some(2.5)));
//! ```

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::graph::{UndirectedGraph, DEFAULT_WEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Edges are pairs of vertices and get the default weight.
    #[default]
    Unweighted,
    /// Edges are triples of two vertices and a floating-point weight.
    Weighted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadConfig {
    format: Format,
    stop_at_negative: bool,
    default_weight: f64,
    max_order: Option<usize>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            format: Format::Unweighted,
            stop_at_negative: false,
            default_weight: DEFAULT_WEIGHT,
            max_order: None,
        }
    }
}

impl LoadConfig {
    pub fn format(self, value: Format) -> Self {
        Self {
            format: value,
            ..self
        }
    }

    pub fn weighted(self) -> Self {
        self.format(Format::Weighted)
    }

    pub fn unweighted(self) -> Self {
        self.format(Format::Unweighted)
    }

    /// Treat an edge starting with a negative vertex as the end of the edge
    /// list and ignore everything after it. Older files end with `-1 -1`.
    ///
    /// Only the first vertex terminates. An edge with a non-negative first
    /// and a negative second vertex is not skipped but fails with
    /// [`VertexOutOfRange`](LoadError::VertexOutOfRange), as without this
    /// option.
    pub fn stop_at_negative(self) -> Self {
        Self {
            stop_at_negative: true,
            ..self
        }
    }

    /// Weight of the edges in the unweighted format.
    pub fn default_weight(self, value: f64) -> Self {
        Self {
            default_weight: value,
            ..self
        }
    }

    /// Reject inputs declaring more vertices than `value`. The storage grows
    /// quadratically with the vertex count, so this guards against a single
    /// token requesting a huge allocation.
    pub fn max_order(self, value: usize) -> Self {
        Self {
            max_order: Some(value),
            ..self
        }
    }
}

/// What the loader expected at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    VertexCount,
    Vertex,
    Weight,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Expected::VertexCount => "vertex count",
            Expected::Vertex => "vertex",
            Expected::Weight => "weight",
        };
        f.write_str(what)
    }
}

/// Error of loading a graph. Positions are zero-based token indices.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading input failed: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty, expected vertex count")]
    EmptyInput,
    #[error("token {position} ({token:?}) is not a valid {expected}")]
    MalformedToken {
        position: usize,
        token: String,
        expected: Expected,
    },
    #[error("invalid vertex count {count}")]
    InvalidVertexCount { count: i64 },
    #[error("token {position}: vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange {
        position: usize,
        vertex: i64,
        order: usize,
    },
    #[error("input ends at token {position} in the middle of an edge, expected {expected}")]
    TruncatedInput { position: usize, expected: Expected },
}

#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoadConfig,
}

impl Loader {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    pub fn unweighted() -> Self {
        Self::new(LoadConfig::default().unweighted())
    }

    pub fn weighted() -> Self {
        Self::new(LoadConfig::default().weighted())
    }

    pub fn load_str(&self, input: &str) -> Result<UndirectedGraph, LoadError> {
        self.load_tokens(input.split_ascii_whitespace().map(Ok))
    }

    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<UndirectedGraph, LoadError> {
        self.load_tokens(ReaderTokens::new(reader))
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<UndirectedGraph, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading graph");

        let file = File::open(path).map_err(|error| {
            warn!(path = %path.display(), %error, "cannot open graph file");
            error
        })?;

        self.load_reader(BufReader::new(file))
    }

    /// Replaces the graph with the one loaded from the reader. On error, the
    /// graph is left unchanged.
    pub fn load_into<R: BufRead>(
        &self,
        graph: &mut UndirectedGraph,
        reader: R,
    ) -> Result<(), LoadError> {
        *graph = self.load_reader(reader)?;
        Ok(())
    }

    /// Loads the graph from an already tokenized input.
    pub fn load_tokens<I, S>(&self, tokens: I) -> Result<UndirectedGraph, LoadError>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut tokens = Tokens::new(tokens.into_iter());

        match self.parse(&mut tokens) {
            Ok(graph) => {
                debug!(
                    order = graph.order(),
                    size = graph.size(),
                    tokens = tokens.position,
                    "graph loaded"
                );
                Ok(graph)
            }
            Err(error) => {
                warn!(%error, "graph load aborted");
                Err(error)
            }
        }
    }

    fn parse<I, S>(&self, tokens: &mut Tokens<I>) -> Result<UndirectedGraph, LoadError>
    where
        I: Iterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let (position, token) = tokens.next()?.ok_or(LoadError::EmptyInput)?;
        let count = parse_int(position, token.as_ref(), Expected::VertexCount)?;

        let order = usize::try_from(count)
            .ok()
            .filter(|order| self.config.max_order.map_or(true, |max| *order <= max))
            .ok_or(LoadError::InvalidVertexCount { count })?;

        let mut graph = UndirectedGraph::try_new(order)
            .map_err(|_| LoadError::InvalidVertexCount { count })?;

        while let Some((position, token)) = tokens.next()? {
            let u = parse_int(position, token.as_ref(), Expected::Vertex)?;

            if u < 0 && self.config.stop_at_negative {
                debug!(position, "edge list terminated by negative vertex");
                break;
            }

            let u = to_vertex(position, u, order)?;

            let (position, token) = tokens.expect(Expected::Vertex)?;
            let v = parse_int(position, token.as_ref(), Expected::Vertex)?;
            let v = to_vertex(position, v, order)?;

            let weight = match self.config.format {
                Format::Weighted => {
                    let (position, token) = tokens.expect(Expected::Weight)?;
                    parse_float(position, token.as_ref())?
                }
                Format::Unweighted => self.config.default_weight,
            };

            // Both vertices are in range at this point.
            graph.add_edge_weighted(u, v, weight);
        }

        Ok(graph)
    }
}

fn parse_int(position: usize, token: &str, expected: Expected) -> Result<i64, LoadError> {
    token.parse().map_err(|_| LoadError::MalformedToken {
        position,
        token: token.to_string(),
        expected,
    })
}

fn parse_float(position: usize, token: &str) -> Result<f64, LoadError> {
    token.parse().map_err(|_| LoadError::MalformedToken {
        position,
        token: token.to_string(),
        expected: Expected::Weight,
    })
}

fn to_vertex(position: usize, value: i64, order: usize) -> Result<usize, LoadError> {
    usize::try_from(value)
        .ok()
        .filter(|vertex| *vertex < order)
        .ok_or(LoadError::VertexOutOfRange {
            position,
            vertex: value,
            order,
        })
}

struct Tokens<I> {
    inner: I,
    position: usize,
}

impl<I, S> Tokens<I>
where
    I: Iterator<Item = io::Result<S>>,
{
    fn new(inner: I) -> Self {
        Self { inner, position: 0 }
    }

    fn next(&mut self) -> Result<Option<(usize, S)>, LoadError> {
        match self.inner.next() {
            Some(token) => {
                let position = self.position;
                self.position += 1;
                Ok(Some((position, token?)))
            }
            None => Ok(None),
        }
    }

    /// Like `next`, but the end of input is an error.
    fn expect(&mut self, expected: Expected) -> Result<(usize, S), LoadError> {
        let position = self.position;
        self.next()?
            .ok_or(LoadError::TruncatedInput { position, expected })
    }
}

/// Splits lines of a reader into owned tokens.
struct ReaderTokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> ReaderTokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: Vec::new().into_iter(),
        }
    }
}

impl<R: BufRead> Iterator for ReaderTokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.pending = self
                        .line
                        .split(u8::is_ascii_whitespace)
                        .filter(|token| !token.is_empty())
                        .map(|token| String::from_utf8_lossy(token).into_owned())
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
