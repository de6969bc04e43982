//! Graphviz DOT emission.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::graph::GraphDescription;

/// Graph-level layout attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphAttributes {
    /// Layout direction (default: "TB", classic top-down game tree).
    pub rankdir: String,
    /// Edge routing (default: "ortho").
    pub splines: String,
    /// Space between nodes of one rank (default: 0.5).
    pub nodesep: f64,
    /// Space between ranks (default: 1.0).
    pub ranksep: f64,
    /// Edge label font size (default: 9).
    pub edge_font_size: u32,
}

impl Default for GraphAttributes {
    fn default() -> Self {
        Self {
            rankdir: "TB".to_string(),
            splines: "ortho".to_string(),
            nodesep: 0.5,
            ranksep: 1.0,
            edge_font_size: 9,
        }
    }
}

impl GraphAttributes {
    pub fn with_rankdir(mut self, rankdir: impl Into<String>) -> Self {
        self.rankdir = rankdir.into();
        self
    }
}

/// Quote a DOT string, escaping quotes, backslashes and line breaks.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl GraphDescription {
    /// Emit Graphviz DOT source, one statement per node and edge.
    #[must_use]
    pub fn to_dot(&self, attrs: &GraphAttributes) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_dot(&mut out, attrs);
        out
    }

    fn write_dot(&self, out: &mut String, attrs: &GraphAttributes) -> std::fmt::Result {
        writeln!(out, "digraph {{")?;
        writeln!(
            out,
            "\tgraph [nodesep={:?} rankdir={} ranksep={:?} splines={}]",
            attrs.nodesep,
            quote(&attrs.rankdir),
            attrs.ranksep,
            quote(&attrs.splines)
        )?;
        for node in &self.nodes {
            writeln!(
                out,
                "\t{} [label={} fillcolor={} fontname={} fontsize={} shape={} style=filled]",
                node.id,
                quote(&node.label),
                quote(&node.style.fill_color),
                quote(&node.style.font_name),
                node.style.font_size,
                node.shape.dot_name(),
            )?;
        }
        for edge in &self.edges {
            writeln!(
                out,
                "\t{} -> {} [label={} fontsize={}]",
                edge.from,
                edge.to,
                quote(&edge.label),
                attrs.edge_font_size
            )?;
        }
        writeln!(out, "}}")
    }
}
