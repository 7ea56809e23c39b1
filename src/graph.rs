// One adjacency slot per vertex id below the capacity; `links[i]` lists the
// neighbors of vertex `i`.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::io::{self, Write};

use log::{trace, warn};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::entity::{Edge, Vertex};
use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    links: Vec<Vec<Vertex>>,
    vertices: HashSet<Vertex>,
    edges: HashSet<Edge>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn with_capacity(capacity: usize) -> Graph {
        Graph {
            links: vec![Vec::new(); capacity],
            vertices: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    /// Like [`Graph::with_capacity`], but reports an oversized capacity as
    /// [`GraphError::AllocationFailed`] instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Graph> {
        let mut graph = Graph::new();
        graph.declare_capacity(capacity)?;
        Ok(graph)
    }

    /// Exclusive upper bound on vertex ids accepted by [`Graph::add_edge`].
    pub fn capacity(&self) -> usize {
        self.links.len()
    }

    /// Grows the adjacency list to `capacity` slots. Shrinking, or a size
    /// the allocator cannot provide, is refused and leaves the graph untouched.
    pub fn declare_capacity(&mut self, capacity: usize) -> Result<()> {
        let current = self.capacity();
        if capacity < current {
            return Err(GraphError::CapacityShrink {
                current,
                requested: capacity,
            });
        }
        self.links
            .try_reserve_exact(capacity - current)
            .map_err(|source| GraphError::AllocationFailed {
                requested: capacity,
                source,
            })?;
        self.links.resize_with(capacity, Vec::new);
        Ok(())
    }

    /// Number of vertex slots, referenced by an edge or not.
    pub fn vertex_count(&self) -> usize {
        self.links.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn links(&self) -> &[Vec<Vertex>] {
        &self.links
    }

    pub fn neighbors(&self, id: usize) -> Option<&[Vertex]> {
        self.links.get(id).map(Vec::as_slice)
    }

    pub fn vertices(&self) -> &HashSet<Vertex> {
        &self.vertices
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    /// Inserts an undirected edge.
    ///
    /// Returns `Ok(true)` when the edge is new and `Ok(false)` when an equal
    /// edge (in either orientation) is already stored, in which case the
    /// adjacency lists are left as they are. An endpoint outside
    /// `0..capacity` is rejected with [`GraphError::VertexOutOfRange`]
    /// before anything is mutated.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        let capacity = self.capacity();
        for vertex in [edge.start, edge.end] {
            if vertex.id >= capacity {
                warn!("Rejecting edge {edge}: vertex {vertex} out of range for capacity {capacity}");
                return Err(GraphError::VertexOutOfRange {
                    id: vertex.id,
                    capacity,
                });
            }
        }

        self.vertices.insert(edge.start);
        self.vertices.insert(edge.end);
        if !self.edges.insert(edge) {
            trace!("Edge {edge} already present");
            return Ok(false);
        }
        self.links[edge.start.id].push(edge.end);
        // a self-loop gets a single entry
        if !edge.is_self_loop() {
            self.links[edge.end.id].push(edge.start);
        }
        Ok(true)
    }

    /// Releases spare capacity held by the adjacency lists and sets.
    pub fn compact_memory(&mut self) {
        trace!("Compacting {} adjacency lists", self.links.len());
        for neighbors in &mut self.links {
            neighbors.shrink_to_fit();
        }
        self.links.shrink_to_fit();
        self.vertices.shrink_to_fit();
        self.edges.shrink_to_fit();
    }

    /// Checks whether every vertex with at least one neighbor belongs to a
    /// single connected component. Vertices without edges are ignored, so a
    /// graph with capacity but no edges is trivially one component.
    pub fn is_one_component(&self) -> Result<bool> {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Color {
            White,
            Gray,
            Black,
        }

        if self.links.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let Some(start) = self.links.iter().position(|n| !n.is_empty()) else {
            return Ok(true);
        };

        let mut colors = vec![Color::White; self.links.len()];
        let mut queue = VecDeque::new();
        colors[start] = Color::Gray;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if colors[current] == Color::Black {
                continue;
            }
            colors[current] = Color::Black;
            for neighbor in &self.links[current] {
                if colors[neighbor.id] == Color::White {
                    colors[neighbor.id] = Color::Gray;
                    queue.push_back(neighbor.id);
                }
            }
        }

        // slots before `start` have no neighbors
        Ok(self
            .links
            .iter()
            .zip(&colors)
            .skip(start)
            .all(|(neighbors, color)| neighbors.is_empty() || *color == Color::Black))
    }

    pub fn dump<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn print(&self) -> io::Result<()> {
        self.dump(io::stdout().lock())
    }

    /// Node index `i` holds vertex id `i`, including vertices without edges.
    pub fn to_petgraph(&self) -> UnGraph<usize, ()> {
        let mut graph = UnGraph::with_capacity(self.capacity(), self.edge_count());
        for id in 0..self.capacity() {
            graph.add_node(id);
        }
        let mut edges: Vec<_> = self.edges.iter().map(Edge::normalized).collect();
        edges.sort_unstable();
        for (a, b) in edges {
            graph.add_edge(NodeIndex::new(a.id), NodeIndex::new(b.id), ());
        }
        graph
    }

    pub fn to_dot(&self) -> String {
        let graph = self.to_petgraph();
        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertex size {}", self.vertex_count())?;
        writeln!(f, "edge size {}", self.edge_count())?;
        writeln!(f, "links:")?;
        for (id, neighbors) in self.links.iter().enumerate() {
            write!(f, "{id}:")?;
            for neighbor in neighbors {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
