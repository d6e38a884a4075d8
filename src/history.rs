use crate::data_structures::{PointIndex, Triangle};
use crate::error::TriangulationError;
use crate::geometry;
use crate::points::PointStore;

/// A single node of the history DAG: the triangle it replaced one or more
/// parent triangles with, and the children that in turn replaced it.
/// `children.is_empty()` means the triangle is still current.
#[derive(Debug, Clone)]
struct HistoryNode {
    triangle: Triangle,
    children: Vec<usize>,
}

/// The de Berg randomised-incremental reference oracle: an arena of triangles
/// linked parent-to-children by the split/flip that replaced one with the
/// other(s), descended from the roots to answer point-location queries in
/// expected `O(log n)` time.
///
/// Stored as an arena-style `Vec` of records referenced by index rather than
/// a flat "current triangles" array: nodes are never removed, so a location
/// query from an old (now-replaced) vertex still has somewhere to
/// descend from.
#[derive(Debug, Clone, Default)]
pub struct HistoryDag {
    nodes: Vec<HistoryNode>,
    roots: Vec<usize>,
}

impl HistoryDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `triangle` as a root (no parent), returning its node index.
    pub fn add_root(&mut self, triangle: Triangle) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(HistoryNode {
            triangle,
            children: Vec::new(),
        });
        self.roots.push(idx);
        idx
    }

    /// Registers `triangle` as a child of `parent`, returning its node index.
    pub fn add_child(&mut self, parent: usize, triangle: Triangle) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(HistoryNode {
            triangle,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        idx
    }

    /// Links an already-registered node as an additional child of `parent`.
    /// Used when an edge flip replaces two parent triangles with one child
    /// that is shared between both of their histories.
    pub fn link_existing_child(&mut self, parent: usize, child: usize) {
        if !self.nodes[parent].children.contains(&child) {
            self.nodes[parent].children.push(child);
        }
    }

    pub fn triangle_at(&self, node: usize) -> Triangle {
        self.nodes[node].triangle
    }

    pub fn is_leaf(&self, node: usize) -> bool {
        self.nodes[node].children.is_empty()
    }

    /// Descends from the roots to the current (leaf) triangle containing
    /// `target`, testing each candidate's three edges (or, for a ghost
    /// triangle, the single real edge) and following whichever child's
    /// triangle still contains the point.
    pub fn locate(&self, points: &PointStore, target: crate::data_structures::Point) -> Result<usize, TriangulationError> {
        let mut current = *self
            .roots
            .iter()
            .find(|&&r| self.contains(points, r, target))
            .ok_or(TriangulationError::DegenerateInput(target))?;

        loop {
            let children = &self.nodes[current].children;
            if children.is_empty() {
                return Ok(current);
            }
            match children.iter().find(|&&c| self.contains(points, c, target)) {
                Some(&next) => current = next,
                // Degenerate: none of the recorded children still contain the
                // point (can happen only if earlier legalisation produced an
                // inconsistent split). Fall back to the current node.
                None => return Ok(current),
            }
        }
    }

    fn contains(&self, points: &PointStore, node: usize, target: crate::data_structures::Point) -> bool {
        let t = self.nodes[node].triangle;
        if t.is_ghost() {
            let (u, v) = t.hull_edge();
            let u = match points.get(u) {
                Ok(p) => p,
                Err(_) => return false,
            };
            let v = match points.get(v) {
                Ok(p) => p,
                Err(_) => return false,
            };
            return geometry::orient(u, v, target) >= 0;
        }
        let verts = t.indices();
        let coords: Vec<_> = verts.iter().map(|&i| points.get(i)).collect();
        if coords.iter().any(|c| c.is_err()) {
            return false;
        }
        let coords: Vec<_> = coords.into_iter().map(Result::unwrap).collect();
        (0..3).all(|e| geometry::orient(coords[e], coords[(e + 1) % 3], target) >= 0)
    }

    /// Total number of nodes ever registered, including superseded ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::Point;

    fn idx(n: u32) -> PointIndex {
        PointIndex::Input(n)
    }

    #[test]
    fn locate_descends_to_the_splitting_child() {
        let points = PointStore::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
            Point::new(1.0, 1.0),
        ]);
        let mut dag = HistoryDag::new();
        let root = dag.add_root(Triangle::new(idx(1), idx(2), idx(3)));
        let c1 = dag.add_child(root, Triangle::new(idx(4), idx(1), idx(2)));
        dag.add_child(root, Triangle::new(idx(4), idx(2), idx(3)));
        dag.add_child(root, Triangle::new(idx(4), idx(3), idx(1)));

        let found = dag.locate(&points, Point::new(2.0, 0.5)).unwrap();
        assert_eq!(dag.triangle_at(found), dag.triangle_at(c1));
    }
}
