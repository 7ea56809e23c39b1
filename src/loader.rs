//! Building a [`Graph`] from a plain-text edge list.
//!
//! Every non-blank line holds exactly two whitespace separated vertex ids:
//!
//! ```text
//! 0 1
//! 1 2
//! ```
//!
//! The adjacency list is sized before insertion, so the source is read once
//! to find the largest id and a second time to insert the edges.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::entity::Edge;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

impl Graph {
    /// Loads the edge list at `path`, opening the file once per pass.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let path = path.as_ref();
        let capacity = required_capacity(records(BufReader::new(File::open(path)?)))?;
        debug!("{}: capacity {capacity}", path.display());
        build(capacity, records(BufReader::new(File::open(path)?)))
    }

    /// Loads an edge list from `reader`. The records are buffered so they
    /// can be walked twice.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph> {
        let parsed = records(reader).collect::<Result<Vec<_>>>()?;
        let capacity = required_capacity(parsed.iter().copied().map(Ok))?;
        debug!("{} records, capacity {capacity}", parsed.len());
        build(capacity, parsed.into_iter().map(Ok))
    }
}

fn build<I>(capacity: usize, records: I) -> Result<Graph>
where
    I: IntoIterator<Item = Result<(usize, Edge)>>,
{
    let mut graph = Graph::try_with_capacity(capacity)?;
    for record in records {
        let (line, edge) = record?;
        graph
            .add_edge(edge)
            .map_err(|e| GraphError::BuildFailed {
                line,
                source: Box::new(e),
            })?;
    }
    graph.compact_memory();
    debug!(
        "Loaded {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn required_capacity<I>(records: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<(usize, Edge)>>,
{
    records.into_iter().try_fold(0, |capacity, record| -> Result<usize> {
        let (line, edge) = record?;
        let (_, high) = edge.normalized();
        let needed = high
            .id
            .checked_add(1)
            .ok_or(GraphError::CapacityOverflow { line, id: high.id })?;
        Ok(capacity.max(needed))
    })
}

/// Yields `(line number, edge)` pairs, skipping blank lines.
fn records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, Edge)>> {
    reader.lines().enumerate().filter_map(|(index, line)| {
        let line_no = index + 1;
        match line {
            Ok(line) => parse_record(line_no, &line)
                .transpose()
                .map(|record| record.map(|edge| (line_no, edge))),
            Err(e) => Some(Err(e.into())),
        }
    })
}

pub(crate) fn parse_record(line_no: usize, line: &str) -> Result<Option<Edge>> {
    let malformed = || GraphError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
    };
    let mut tokens = line.split_ascii_whitespace();
    let Some(start) = tokens.next() else {
        return Ok(None);
    };
    let end = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    let start: usize = start.parse().map_err(|_| malformed())?;
    let end: usize = end.parse().map_err(|_| malformed())?;
    Ok(Some(Edge::new(start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_ids() {
        let edge = parse_record(1, "3\t 7 ").unwrap().unwrap();
        assert_eq!(edge, Edge::new(3, 7));
    }

    #[test]
    fn blank_line_is_skipped() {
        assert!(parse_record(1, "").unwrap().is_none());
        assert!(parse_record(1, "   \t").unwrap().is_none());
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for line in ["4", "1 2 3", "a b", "-1 2", "1 2.5"] {
            match parse_record(9, line) {
                Err(GraphError::MalformedRecord { line: 9, content }) => assert_eq!(content, line),
                other => panic!("unexpected result for {line:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn capacity_is_max_id_plus_one() {
        let recs = [Edge::new(0, 4), Edge::new(2, 1)]
            .into_iter()
            .enumerate()
            .map(Ok);
        assert_eq!(required_capacity(recs).unwrap(), 5);
        assert_eq!(required_capacity(std::iter::empty()).unwrap(), 0);
    }

    #[test]
    fn largest_id_cannot_be_sized() {
        let recs = [Ok((3, Edge::new(0, usize::MAX)))];
        assert!(matches!(
            required_capacity(recs),
            Err(GraphError::CapacityOverflow { line: 3, id: usize::MAX })
        ));
    }

    #[test]
    fn rejected_insertion_aborts_the_build() {
        let recs = [Ok((1, Edge::new(0, 1))), Ok((2, Edge::new(1, 2)))];
        match build(2, recs) {
            Err(GraphError::BuildFailed { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(
                    *source,
                    GraphError::VertexOutOfRange { id: 2, capacity: 2 }
                ));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
