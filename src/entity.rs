use std::fmt;
use std::hash::{Hash, Hasher};

/// A graph node, identified by a dense integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub id: usize,
}

impl Vertex {
    pub fn new(id: usize) -> Vertex {
        Vertex { id }
    }
}

impl From<usize> for Vertex {
    fn from(id: usize) -> Self {
        Vertex { id }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An undirected connection. `(a, b)` and `(b, a)` are the same edge.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub start: Vertex,
    pub end: Vertex,
}

impl Edge {
    pub fn new(start_id: usize, end_id: usize) -> Edge {
        Edge::from_vertices(Vertex::new(start_id), Vertex::new(end_id))
    }

    pub fn from_vertices(start: Vertex, end: Vertex) -> Edge {
        Edge { start, end }
    }

    /// Endpoints ordered as `(min, max)`.
    pub fn normalized(&self) -> (Vertex, Vertex) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Edge {}

// must agree with `eq`, so hash the normalized pair
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn vertex_identity_is_id() {
        assert_eq!(Vertex::new(7), Vertex::from(7));
        assert_ne!(Vertex::new(7), Vertex::new(8));
        assert_eq!(hash_of(&Vertex::new(3)), hash_of(&Vertex::new(3)));
    }

    #[test]
    fn reversed_edge_is_equal_and_hashes_the_same() {
        let e = Edge::new(2, 9);
        let r = Edge::new(9, 2);
        assert_eq!(e, r);
        assert_eq!(hash_of(&e), hash_of(&r));
    }

    #[test]
    fn distinct_pairs_differ() {
        assert_ne!(Edge::new(1, 2), Edge::new(1, 3));
        assert_ne!(Edge::new(0, 0), Edge::new(0, 1));
    }

    #[test]
    fn edge_set_deduplicates_reversed_pairs() {
        let set: HashSet<Edge> = [Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn normalized_orders_endpoints() {
        assert_eq!(
            Edge::new(5, 1).normalized(),
            (Vertex::new(1), Vertex::new(5))
        );
        assert!(Edge::new(4, 4).is_self_loop());
    }
}
