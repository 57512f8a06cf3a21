use log::{debug, trace};

use super::dijkstra::{shortest_path, shortest_path_from};
use super::suppression::Suppression;
use crate::algorithm::acceptance::{Acceptance, Candidate, Selector};
use crate::algorithm::ranked::Ranked;
use crate::network::{Metric, Network, NodeId, NodeIndex};
use crate::utils::error::{Error, Result};


/// Deviation search for the K shortest loopless paths.
///
/// The network is borrowed mutably and used as scratch space: edges are
/// suppressed around every spur search and put back before the next one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Yens {
    acceptance: Acceptance,
}

impl Yens {
    pub fn new(acceptance: Acceptance) -> Self {
        Yens { acceptance }
    }
    pub fn acceptance(&self) -> Acceptance {
        self.acceptance
    }
    /// Up to `k` loopless paths from `source` to `target`, lightest first.
    ///
    /// `weight` names the edge attribute to minimise; an empty name counts
    /// hops. With `all` the whole ranking is returned, otherwise only the
    /// last accepted path.
    pub fn compute<N: NodeId>(&self, graph: &mut Network<N>, source: &N, target: &N,
                              k: usize, weight: &str, all: bool) -> Result<Ranked<N>> {
        if k == 0 {
            return Err(Error::ZeroK);
        }
        if source == target {
            return Ok(Ranked::new(vec![(0.0, vec![source.clone()])], all));
        }
        let src = graph.index_of(source)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", source)))?;
        let dst = graph.index_of(target)
            .ok_or_else(|| Error::NodeNotFound(format!("{:?}", target)))?;

        let list_a = self.compute_pair(graph, src, dst, k, Metric::from(weight))?;
        let ranked = list_a.into_iter()
            .map(|(dist, path)| (dist, graph.node_ids(&path)))
            .collect();
        Ok(Ranked::new(ranked, all))
    }
    pub fn compute_pair<N: NodeId>(&self, graph: &mut Network<N>, src: NodeIndex,
                                   dst: NodeIndex, k: usize, metric: Metric)
        -> Result<Vec<Candidate>> {
        debug_assert!(src != dst);
        let shortest = shortest_path(graph, src, dst, metric)?
            .ok_or_else(|| Error::NoPath(
                format!("{:?}", graph.node_id(src)),
                format!("{:?}", graph.node_id(dst))))?;
        let mut list_a = vec![shortest];
        let mut selector = self.acceptance.selector();

        for _ in 1..k {
            let (prev_dist, prev_path) = list_a[list_a.len() - 1].clone();
            for i in 0..prev_path.len() - 1 {
                let spur_node = prev_path[i];
                let root_path = &prev_path[..=i];
                // the spur search carries on from the root's own sum
                let root_dist = metric.length(graph, root_path)?;

                // For example, if search for 4th shortest path with spur-node (2)
                // We should suppress edges (2)──>(3), (2)──>(5) and leave (1)
                //
                // (1)──>(2)──>(3)──>(4)  1st
                //  │     └───>(5)──>(4)  2nd
                //  └───>(7)──>(8)──>(4)  3rd

                let mut scratch = Suppression::new(graph);
                for (_, path) in list_a.iter() {
                    if path.len() > i + 1 && path[..=i] == *root_path {
                        scratch.remove_edge(path[i], path[i + 1]);
                    }
                }
                for &node in root_path[..i].iter() {
                    scratch.remove_outgoings(node);
                }
                trace!("spur node #{} with {} edges suppressed", i, scratch.len());

                let spur = shortest_path_from(scratch.graph(), spur_node, dst, metric, root_dist)?;
                drop(scratch);

                match spur {
                    Some((_, spur_path)) => {
                        let mut total_path = root_path[..i].to_vec();
                        total_path.extend(spur_path);
                        let total_dist = metric.length(graph, &total_path)?;
                        trace!("candidate {:?} weighs {}", total_path, total_dist);
                        selector.offer(total_dist, total_path, prev_dist);
                    }
                    None => continue,  // spur-dst exists no more paths
                }
            }
            match selector.take(&list_a) {
                Some(next) => {
                    debug!("accepted path #{} weighing {}", list_a.len(), next.0);
                    list_a.push(next);
                }
                None => {
                    debug!("exhausted after {} of {} paths", list_a.len(), k);
                    break;  // src-dst exists no more paths
                }
            }
        }
        Ok(list_a)
    }
}
