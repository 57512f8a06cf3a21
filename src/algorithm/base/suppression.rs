use crate::network::{Edge, Network, NodeId, NodeIndex};


struct Removed {
    position: usize,
    edge: Edge,
}

/// Scratch view of a network with some edges taken out.
///
/// Every removal goes into a ledger. Dropping the guard puts the edges back
/// in reverse order, each at the adjacency position it was taken from, so the
/// network is left exactly as it was found whichever way the scope exits.
pub struct Suppression<'g, N: NodeId> {
    graph: &'g mut Network<N>,
    ledger: Vec<Removed>,
}

impl<'g, N: NodeId> Suppression<'g, N> {
    pub fn new(graph: &'g mut Network<N>) -> Self {
        Suppression { graph, ledger: vec![] }
    }
    pub fn graph(&self) -> &Network<N> {
        &*self.graph
    }
    pub fn len(&self) -> usize {
        self.ledger.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
    /// Returns false if the edge is absent or already suppressed.
    pub fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> bool {
        match self.graph.remove_edge(from, to) {
            Some((position, edge)) => {
                self.ledger.push(Removed { position, edge });
                true
            }
            None => false,
        }
    }
    pub fn remove_outgoings(&mut self, node: NodeIndex) {
        let targets: Vec<_> = self.graph.outgoings(node).collect();
        for to in targets.into_iter().rev() {
            self.remove_edge(node, to);
        }
    }
    pub fn restore(&mut self) {
        while let Some(Removed { position, edge }) = self.ledger.pop() {
            self.graph.insert_edge_at(position, edge);
        }
    }
}

impl<'g, N: NodeId> Drop for Suppression<'g, N> {
    fn drop(&mut self) {
        self.restore();
    }
}
