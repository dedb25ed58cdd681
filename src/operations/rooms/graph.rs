use rustc_hash::{FxHashMap, FxHashSet};

use crate::math::Point2;

use super::junction::Segment;

/// Vertex identity: coordinates rounded to centimeters, packed into 64 bits
/// (high half x, low half y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey(u64);

impl VertexKey {
    /// Quantizes a point to centimeter precision.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn quantize(p: &Point2) -> Self {
        let qx = (p.x * 100.0).round() as i32;
        let qy = (p.y * 100.0).round() as i32;
        Self((u64::from(qx as u32) << 32) | u64::from(qy as u32))
    }
}

/// One outgoing half-edge at a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    /// Target vertex index.
    pub to: usize,
    /// Outgoing direction, `atan2(dy, dx)` in `(-pi, pi]`.
    pub angle: f64,
}

/// Undirected planar graph of wall segments with angle-sorted adjacency.
#[derive(Debug, Clone, Default)]
pub struct PlanarGraph {
    pub(crate) vertices: Vec<Point2>,
    pub(crate) adjacency: Vec<Vec<HalfEdge>>,
}

impl PlanarGraph {
    /// Builds the graph from split segments.
    ///
    /// Endpoints sharing a centimeter key become one vertex positioned at the
    /// first occurrence. Self-loops and repeated undirected edges are dropped.
    #[must_use]
    pub fn build(segments: &[Segment]) -> Self {
        let mut graph = Self::default();
        let mut ids: FxHashMap<VertexKey, usize> = FxHashMap::default();
        let mut edges: FxHashSet<(usize, usize)> = FxHashSet::default();

        for seg in segments {
            let u = graph.ensure_vertex(&mut ids, seg.start);
            let v = graph.ensure_vertex(&mut ids, seg.end);
            if u == v {
                continue;
            }
            if !edges.insert((u.min(v), u.max(v))) {
                continue;
            }

            let pu = graph.vertices[u];
            let pv = graph.vertices[v];
            graph.adjacency[u].push(HalfEdge {
                to: v,
                angle: (pv.y - pu.y).atan2(pv.x - pu.x),
            });
            graph.adjacency[v].push(HalfEdge {
                to: u,
                angle: (pu.y - pv.y).atan2(pu.x - pv.x),
            });
        }

        for half_edges in &mut graph.adjacency {
            half_edges.sort_by(|a, b| a.angle.total_cmp(&b.angle).then(a.to.cmp(&b.to)));
        }
        graph
    }

    /// Finds or inserts the vertex for `p`, returning its index.
    fn ensure_vertex(&mut self, ids: &mut FxHashMap<VertexKey, usize>, p: Point2) -> usize {
        *ids.entry(VertexKey::quantize(&p)).or_insert_with(|| {
            self.vertices.push(p);
            self.adjacency.push(Vec::new());
            self.vertices.len() - 1
        })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[must_use]
    pub fn vertex(&self, id: usize) -> Option<&Point2> {
        self.vertices.get(id)
    }

    /// Outgoing half-edges of `id`, sorted by angle ascending.
    #[must_use]
    pub fn half_edges(&self, id: usize) -> &[HalfEdge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}
