//! Writing graphs out, either back to the [text format](crate::load) or to
//! Graphviz DOT for visualization.

use std::io::{self, Cursor, Write};

use crate::{graph::UndirectedGraph, load::Format};

pub trait Export {
    fn export<W: Write>(&self, graph: &UndirectedGraph, out: &mut W) -> io::Result<()>;

    fn to_string(&self, graph: &UndirectedGraph) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("exported formats are text formats")
    }
}

/// The format read by [`Loader`](crate::load::Loader). The vertex count is on
/// the first line, then one edge per line with the smaller vertex first.
///
/// Weights are written with the shortest representation that parses back to
/// the same value, so a weighted export loads into an equal graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text {
    format: Format,
}

impl Text {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn unweighted() -> Self {
        Self::new(Format::Unweighted)
    }

    pub fn weighted() -> Self {
        Self::new(Format::Weighted)
    }
}

impl Export for Text {
    fn export<W: Write>(&self, graph: &UndirectedGraph, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", graph.order())?;

        for (u, v, weight) in graph.edges() {
            match self.format {
                Format::Unweighted => writeln!(out, "{v} {u}")?,
                Format::Weighted => writeln!(out, "{v} {u} {weight}")?,
            }
        }

        Ok(())
    }
}

pub struct Dot {
    name: String,
    with_weights: bool,
}

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            with_weights: false,
        }
    }

    /// Label edges with their weights.
    pub fn with_weights(self) -> Self {
        Self {
            with_weights: true,
            ..self
        }
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Export for Dot {
    fn export<W: Write>(&self, graph: &UndirectedGraph, out: &mut W) -> io::Result<()> {
        out.write_all(b"graph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for v in graph.vertices() {
            writeln!(out, "    v{v} [label=\"{v}\"];")?;
        }

        for (u, v, weight) in graph.edges() {
            if self.with_weights {
                writeln!(out, "    v{v} -- v{u} [label=\"{weight}\"];")?;
            } else {
                writeln!(out, "    v{v} -- v{u};")?;
            }
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
