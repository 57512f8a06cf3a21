use hashbrown::HashMap;
use std::f64::INFINITY as INF;

use super::heap::MyMinHeap;
use crate::network::{Metric, Network, NodeId, NodeIndex, Path};
use crate::utils::error::Result;


/// Single-source Dijkstra over the current state of a network.
///
/// A node keeps the predecessor of its first strictly shorter relaxation, so
/// the same network always yields the same path.
#[derive(Default)]
pub struct Dijkstra {
    root: Option<NodeIndex>,
    dist: HashMap<NodeIndex, f64>,
    pred: HashMap<NodeIndex, NodeIndex>,
}


impl Dijkstra {
    /// Settles nodes from `root` outwards, stopping early once `stop` is settled.
    pub fn compute<N: NodeId>(&mut self, graph: &Network<N>, root: NodeIndex,
                              stop: Option<NodeIndex>, metric: Metric) -> Result<()> {
        self.compute_from(graph, root, stop, metric, 0.0)
    }
    /// Same as `compute`, but `root` starts at distance `origin`. Every
    /// distance is then summed in path order from `origin`, exactly as
    /// `Metric::length` sums the whole path.
    pub fn compute_from<N: NodeId>(&mut self, graph: &Network<N>, root: NodeIndex,
                                   stop: Option<NodeIndex>, metric: Metric,
                                   origin: f64) -> Result<()> {
        self.root = Some(root);
        self.dist.clear();
        self.pred.clear();
        let mut heap = MyMinHeap::new();
        let mut seen = HashMap::new();

        seen.insert(root, origin);
        heap.push(root, origin.into());

        while let Some((v, rv_dist)) = heap.pop() {
            let rv_dist: f64 = rv_dist.into();
            if self.dist.contains_key(&v) { continue; }
            self.dist.insert(v, rv_dist);
            if stop == Some(v) { break; }

            for u in graph.outgoings(v) {
                let ru_dist = rv_dist + metric.cost(graph, v, u)?;

                if self.dist.contains_key(&u)
                    || ru_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert(u, v);
                seen.insert(u, ru_dist);
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, ru_dist.into()); },
                    None    => { heap.push(u, ru_dist.into()); },
                }
            }
        }
        Ok(())
    }
    pub fn distance(&self, dst: NodeIndex) -> Option<f64> {
        self.dist.get(&dst).copied()
    }
    pub fn shortest_path(&self, dst: NodeIndex) -> Option<(f64, Path)> {
        let dist = self.distance(dst)?;
        let root = self.root?;
        let mut path = vec![dst];
        let mut node = dst;
        while node != root {
            node = *self.pred.get(&node)?;
            path.push(node);
        }
        path.reverse();
        Some((dist, path))
    }
}


/// Minimum-weight path from `src` to `dst`, `None` when unreachable.
pub fn shortest_path<N: NodeId>(graph: &Network<N>, src: NodeIndex, dst: NodeIndex,
                                metric: Metric) -> Result<Option<(f64, Path)>> {
    let mut dijkstra = Dijkstra::default();
    dijkstra.compute(graph, src, Some(dst), metric)?;
    Ok(dijkstra.shortest_path(dst))
}

/// Continues a path that already weighs `origin` at `src`.
pub fn shortest_path_from<N: NodeId>(graph: &Network<N>, src: NodeIndex, dst: NodeIndex,
                                     metric: Metric, origin: f64)
    -> Result<Option<(f64, Path)>> {
    let mut dijkstra = Dijkstra::default();
    dijkstra.compute_from(graph, src, Some(dst), metric, origin)?;
    Ok(dijkstra.shortest_path(dst))
}
