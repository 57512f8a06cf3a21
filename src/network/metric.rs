use itertools::Itertools;

use super::{Network, NodeId, NodeIndex};
use crate::utils::error::{Error, Result};


/// How an edge is priced during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric<'a> {
    /// Every edge costs 1, a path costs its hop count.
    Hops,
    /// Edges cost the value of the named attribute.
    Attribute(&'a str),
}

impl<'a> From<&'a str> for Metric<'a> {
    fn from(key: &'a str) -> Self {
        if key.is_empty() {
            Metric::Hops
        } else {
            Metric::Attribute(key)
        }
    }
}

impl<'a> Metric<'a> {
    pub fn is_weighted(&self) -> bool {
        matches!(self, Metric::Attribute(_))
    }
    pub fn cost<N: NodeId>(&self, graph: &Network<N>, from: NodeIndex, to: NodeIndex)
        -> Result<f64> {
        let key = match self {
            Metric::Hops => return Ok(1.0),
            Metric::Attribute(key) => key,
        };
        let weight = graph.edge(from, to)
            .and_then(|edge| edge.attribute(key))
            .ok_or_else(|| Error::MissingWeight(graph.describe_edge(from, to), key.to_string()))?;
        // rejects NaN as well
        if !(weight >= 0.0) || weight.is_infinite() {
            return Err(Error::InvalidWeight(graph.describe_edge(from, to), weight, key.to_string()));
        }
        Ok(weight)
    }
    pub fn length<N: NodeId>(&self, graph: &Network<N>, path: &[NodeIndex]) -> Result<f64> {
        path.iter()
            .tuple_windows()
            .map(|(&from, &to)| self.cost(graph, from, to))
            .sum()
    }
}
