// File: crates/kinetic-core/src/picker.rs
// Summary: 2D nearest-neighbor index (kd-tree) over scaled points for hover picking.
// Notes:
// - Stale whenever the underlying point set changes (isolation toggle, rescale);
//   callers rebuild instead of mutating.
// - Equidistant candidates resolve to the lowest insertion index, so results
//   are deterministic for a given build order.

use crate::snapshot::ScaledPoint;

#[derive(Clone, Copy, Debug)]
struct Entry {
    x: f32,
    y: f32,
    idx: usize,
}

#[derive(Debug)]
struct Node {
    entry: Entry,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

/// Balanced kd-tree; `nearest` is O(log n) for the point clouds charts
/// produce, against a brute-force O(n) scan.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl SpatialIndex {
    pub fn build(points: &[ScaledPoint]) -> Self {
        Self::from_coords(points.iter().map(|p| (p.x, p.y)))
    }

    pub fn from_coords(coords: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut entries: Vec<Entry> = coords
            .into_iter()
            .enumerate()
            .map(|(idx, (x, y))| Entry { x, y, idx })
            .collect();
        let len = entries.len();
        let root = build_node(&mut entries, 0);
        Self { root, len }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Index (insertion order) of the point closest to `(x, y)` by Euclidean
    /// distance; `None` only for an empty index.
    pub fn nearest(&self, x: f32, y: f32) -> Option<usize> {
        let root = self.root.as_deref()?;
        let mut best = (f32::INFINITY, usize::MAX);
        search(root, x, y, 0, &mut best);
        Some(best.1)
    }
}

fn build_node(entries: &mut [Entry], depth: usize) -> Option<Box<Node>> {
    if entries.is_empty() {
        return None;
    }
    let axis = depth % 2;
    // Stable ordering: axis coordinate, then insertion index, so duplicate
    // coordinates build the same tree every time.
    entries.sort_by(|a, b| {
        let (ka, kb) = if axis == 0 { (a.x, b.x) } else { (a.y, b.y) };
        ka.total_cmp(&kb).then(a.idx.cmp(&b.idx))
    });
    let mid = entries.len() / 2;
    let entry = entries[mid];
    let (lo, rest) = entries.split_at_mut(mid);
    let hi = &mut rest[1..];
    Some(Box::new(Node {
        entry,
        left: build_node(lo, depth + 1),
        right: build_node(hi, depth + 1),
    }))
}

fn search(node: &Node, x: f32, y: f32, depth: usize, best: &mut (f32, usize)) {
    let dx = x - node.entry.x;
    let dy = y - node.entry.y;
    let d2 = dx * dx + dy * dy;
    if d2 < best.0 || (d2 == best.0 && node.entry.idx < best.1) {
        *best = (d2, node.entry.idx);
    }

    let axis_delta = if depth % 2 == 0 { dx } else { dy };
    let (near, far) = if axis_delta < 0.0 {
        (&node.left, &node.right)
    } else {
        (&node.right, &node.left)
    };
    if let Some(n) = near {
        search(n, x, y, depth + 1, best);
    }
    // The far half can still hold a closer (or equidistant lower-index) point
    // when the splitting plane is within the best radius.
    if axis_delta * axis_delta <= best.0 {
        if let Some(n) = far {
            search(n, x, y, depth + 1, best);
        }
    }
}
