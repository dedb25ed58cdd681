use rustc_hash::FxHashSet;

use super::graph::PlanarGraph;

/// Why a face walk was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedFace {
    /// The walk reached a vertex with no outgoing half-edges.
    DeadEnd { vertex: usize },
    /// The head vertex has no half-edge back to the tail.
    MissingBackEdge { from: usize, to: usize },
    /// The walk did not close within the step bound.
    StepLimitExceeded { limit: usize },
}

/// Result of walking one face of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceWalk {
    /// Vertex ids around the face, in traversal order.
    Closed(Vec<usize>),
    Malformed(MalformedFace),
}

/// Step bound for a single face walk on `graph`.
#[must_use]
pub fn step_limit(graph: &PlanarGraph) -> usize {
    graph.vertex_count() * 2 + 10
}

/// Enumerates every face of the graph.
///
/// Each directed half-edge is traversed at most once, so every face is
/// reported exactly once. Bounded faces come out counter-clockwise (positive
/// signed area, y-up); the unbounded face of each component comes out
/// clockwise.
#[must_use]
pub fn enumerate_faces(graph: &PlanarGraph) -> Vec<FaceWalk> {
    let limit = step_limit(graph);
    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut faces = Vec::new();

    for (u, half_edges) in graph.adjacency.iter().enumerate() {
        for he in half_edges {
            if visited.contains(&(u, he.to)) {
                continue;
            }
            faces.push(walk_face(graph, u, he.to, &mut visited, limit));
        }
    }

    faces
}

/// Walks one face starting with half-edge `start → next`.
///
/// At each head vertex the walk takes the half-edge immediately preceding
/// (cyclically, in angle order) the one that leads back to the tail. The
/// walk closes on reaching an already visited half-edge.
pub fn walk_face(
    graph: &PlanarGraph,
    start: usize,
    next: usize,
    visited: &mut FxHashSet<(usize, usize)>,
    limit: usize,
) -> FaceWalk {
    let mut face: Vec<usize> = Vec::new();
    let (mut from, mut to) = (start, next);

    for _ in 0..limit {
        if !visited.insert((from, to)) {
            return FaceWalk::Closed(face);
        }
        face.push(from);

        let out = graph.half_edges(to);
        if out.is_empty() {
            return FaceWalk::Malformed(MalformedFace::DeadEnd { vertex: to });
        }
        let Some(back) = out.iter().position(|he| he.to == from) else {
            return FaceWalk::Malformed(MalformedFace::MissingBackEdge { from: to, to: from });
        };

        let prev = (back + out.len() - 1) % out.len();
        from = to;
        to = out[prev].to;
    }

    FaceWalk::Malformed(MalformedFace::StepLimitExceeded { limit })
}
