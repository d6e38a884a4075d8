use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::TriangulationConfig;
use crate::data_structures::{Point, PointIndex, Triangle, Triangulation};
use crate::error::TriangulationError;
use crate::geometry;
use crate::ghost;
use crate::history::HistoryDag;
use crate::points::PointStore;

/// Builds a Delaunay triangulation the way de Berg et al.'s randomised
/// incremental algorithm does: points are inserted in random order, each one
/// splitting the triangle (or pair of triangles, if it falls on an edge) that
/// currently contains it, followed by a sequence of edge flips that restores
/// the Delaunay property. Every split and flip is also recorded in a
/// [`HistoryDag`], which is this crate's reference oracle: its expected
/// `O(log n)` descent is compared against jump-and-walk location, and the
/// final triangle set is compared against [`crate::bowyer_watson`]'s output
/// for equivalence.
///
/// The flip step uses an explicit stack rather than plain recursion, so a
/// chain of flips triggered by one insertion cannot blow the call stack on a
/// pathological input.
pub fn triangulate_berg(
    input: &[Point],
    config: &TriangulationConfig,
) -> Result<(Triangulation, HistoryDag, PointStore), TriangulationError> {
    let accepted = crate::bowyer_watson::dedup_points(input, config.duplicate_policy)?;
    let store = PointStore::new(accepted);

    let mut tri = Triangulation::new();
    let mut dag = HistoryDag::new();
    let mut nodes: HashMap<Triangle, usize> = HashMap::new();

    let (lr, up, ll) = store.bounding_corners();
    tri.add_triangle(lr, up, ll);
    let root = dag.add_root(Triangle::new(lr, up, ll));
    nodes.insert(Triangle::new(lr, up, ll), root);

    let mut order: Vec<PointIndex> = store.iter().map(|(i, _)| i).collect();
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    order.shuffle(&mut rng);

    log::debug!(
        "de berg: inserting {} points in random order (seed {:?})",
        order.len(),
        config.seed
    );

    for point_index in order {
        add_point_berg(&mut tri, &mut dag, &mut nodes, &store, point_index)?;
    }

    for corner in [lr, up, ll] {
        tri.purge_vertex(corner);
    }

    if config.keep_ghosts {
        ghost::add_ghost_triangles(&mut tri);
    }

    log::debug!("de berg: history dag has {} nodes", dag.node_count());

    Ok((tri, dag, store))
}

/// Inserts `point_index` into `tri`, updating `dag`/`nodes` in step.
pub fn add_point_berg(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    nodes: &mut HashMap<Triangle, usize>,
    store: &PointStore,
    point_index: PointIndex,
) -> Result<(), TriangulationError> {
    let p = store.get(point_index)?;
    let leaf = dag.locate(store, p)?;
    let containing = dag.triangle_at(leaf);
    let [i, j, k] = containing.indices();
    let pi = store.get(i)?;
    let pj = store.get(j)?;
    let pk = store.get(k)?;

    let orientations = [
        geometry::orient(pi, pj, p),
        geometry::orient(pj, pk, p),
        geometry::orient(pk, pi, p),
    ];

    let mut legalise_stack: Vec<((PointIndex, PointIndex), usize)> = Vec::new();

    if let Some(edge_pos) = orientations.iter().position(|&o| o == 0) {
        // p lies on one of the containing triangle's edges: a 4-way split.
        let edges = [(i, j, k), (j, k, i), (k, i, j)];
        let (a, b, c) = edges[edge_pos];
        let opposite_leaf_edge = tri.get_edge(b, a);

        tri.delete_triangle(a, b, c);
        nodes.remove(&Triangle::new(a, b, c));

        let t1 = Triangle::new(a, point_index, c);
        let t2 = Triangle::new(point_index, b, c);
        tri.add_triangle(a, point_index, c);
        tri.add_triangle(point_index, b, c);
        let n1 = dag.add_child(leaf, t1);
        let n2 = dag.add_child(leaf, t2);
        nodes.insert(t1, n1);
        nodes.insert(t2, n2);
        legalise_stack.push(((point_index, c), n1));
        legalise_stack.push(((c, point_index), n2));
        legalise_stack.push(((a, point_index), n1));
        legalise_stack.push(((point_index, b), n2));

        if opposite_leaf_edge != PointIndex::Boundary && opposite_leaf_edge != PointIndex::NoAdjacent
        {
            let far = Triangle::new(b, a, opposite_leaf_edge);
            match nodes.get(&far) {
                Some(&far_node) => {
                    tri.delete_triangle(b, a, opposite_leaf_edge);
                    nodes.remove(&far);

                    let t3 = Triangle::new(b, point_index, opposite_leaf_edge);
                    let t4 = Triangle::new(point_index, a, opposite_leaf_edge);
                    tri.add_triangle(b, point_index, opposite_leaf_edge);
                    tri.add_triangle(point_index, a, opposite_leaf_edge);
                    let n3 = dag.add_child(far_node, t3);
                    let n4 = dag.add_child(far_node, t4);
                    nodes.insert(t3, n3);
                    nodes.insert(t4, n4);
                    legalise_stack.push(((point_index, opposite_leaf_edge), n3));
                    legalise_stack.push(((opposite_leaf_edge, point_index), n4));
                    legalise_stack.push(((b, point_index), n3));
                    legalise_stack.push(((point_index, a), n4));
                }
                None => debug_assert!(
                    false,
                    "triangle {far:?} exists in the adjacency structure but has no history-DAG node"
                ),
            }
        }
    } else {
        // Ordinary interior split into three triangles fanning out from p.
        tri.delete_triangle(i, j, k);
        nodes.remove(&containing);

        let t1 = Triangle::new(i, j, point_index);
        let t2 = Triangle::new(j, k, point_index);
        let t3 = Triangle::new(k, i, point_index);
        tri.add_triangle(i, j, point_index);
        tri.add_triangle(j, k, point_index);
        tri.add_triangle(k, i, point_index);

        let n1 = dag.add_child(leaf, t1);
        let n2 = dag.add_child(leaf, t2);
        let n3 = dag.add_child(leaf, t3);
        nodes.insert(t1, n1);
        nodes.insert(t2, n2);
        nodes.insert(t3, n3);

        legalise_stack.push(((i, j), n1));
        legalise_stack.push(((j, k), n2));
        legalise_stack.push(((k, i), n3));
    }

    while let Some(((a, b), node)) = legalise_stack.pop() {
        flip_if_illegal(tri, dag, nodes, store, (a, b), point_index, node, &mut legalise_stack)?;
    }

    Ok(())
}

/// Checks whether the edge `(a, b)` of the triangle `(a, b, point_index)`
/// (registered at `node`) needs flipping, and if so performs the flip and
/// pushes the two freshly legal edges back onto `stack`.
fn flip_if_illegal(
    tri: &mut Triangulation,
    dag: &mut HistoryDag,
    nodes: &mut HashMap<Triangle, usize>,
    store: &PointStore,
    (a, b): (PointIndex, PointIndex),
    point_index: PointIndex,
    node: usize,
    stack: &mut Vec<((PointIndex, PointIndex), usize)>,
) -> Result<(), TriangulationError> {
    let opposite = tri.get_edge(b, a);
    if opposite == PointIndex::Boundary || opposite == PointIndex::NoAdjacent {
        return Ok(());
    }

    let far = Triangle::new(b, a, opposite);
    let far_node = match nodes.get(&far) {
        Some(&n) => n,
        None => {
            debug_assert!(
                false,
                "triangle {far:?} exists in the adjacency structure but has no history-DAG node"
            );
            return Ok(());
        }
    };

    let pb = store.get(b)?;
    let pa = store.get(a)?;
    let popp = store.get(opposite)?;
    let pp = store.get(point_index)?;

    if geometry::in_circle(pb, pa, popp, pp) <= 0 {
        return Ok(());
    }

    log::trace!("de berg: flipping edge ({a}, {b}) away from {opposite}");

    tri.delete_triangle(a, b, point_index);
    tri.delete_triangle(b, a, opposite);
    nodes.remove(&Triangle::new(a, b, point_index));
    nodes.remove(&far);

    let new_left = Triangle::new(point_index, b, opposite);
    let new_right = Triangle::new(a, point_index, opposite);
    tri.add_triangle(point_index, b, opposite);
    tri.add_triangle(a, point_index, opposite);

    let nl = dag.add_child(node, new_left);
    dag.link_existing_child(far_node, nl);
    let nr = dag.add_child(node, new_right);
    dag.link_existing_child(far_node, nr);
    nodes.insert(new_left, nl);
    nodes.insert(new_right, nr);

    stack.push(((b, opposite), nl));
    stack.push(((opposite, a), nr));
    Ok(())
}
