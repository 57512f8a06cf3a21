use std::fmt;
use hashbrown::HashMap;

use super::NodeId;


#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node<N> {
    id: N,
    outgoing: Vec<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    ends: (NodeIndex, NodeIndex),
    attributes: HashMap<String, f64>,
}

impl<N> Node<N> {
    pub fn new(id: N) -> Self {
        Self { id, outgoing: vec![] }
    }
}

impl Edge {
    pub fn new(ends: (NodeIndex, NodeIndex), attributes: HashMap<String, f64>) -> Self {
        Edge { ends, attributes }
    }
    pub fn ends(&self) -> (NodeIndex, NodeIndex) {
        self.ends
    }
    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).copied()
    }
}


/// Directed graph with at most one edge per ordered pair of nodes.
///
/// Each node keeps its outgoing neighbours in insertion order, which is the
/// order every search scans them in. Removing an edge and re-inserting it at
/// the reported position leaves the network exactly as it was.
#[derive(Clone, Debug)]
pub struct Network<N> {
    nodes: Vec<Node<N>>,
    lookup: HashMap<N, NodeIndex>,
    edges: HashMap<(NodeIndex, NodeIndex), Edge>,
}

impl<N: NodeId> Default for Network<N> {
    fn default() -> Self {
        Network { nodes: vec![], lookup: HashMap::new(), edges: HashMap::new() }
    }
}

impl<N: NodeId> PartialEq for Network<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: NodeId> Network<N> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn index_of(&self, id: &N) -> Option<NodeIndex> {
        self.lookup.get(id).copied()
    }
    pub fn node_id(&self, node: NodeIndex) -> &N {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()].id
    }
    pub fn node_ids(&self, path: &[NodeIndex]) -> Vec<N> {
        path.iter()
            .map(|&n| self.node_id(n).clone())
            .collect()
    }
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=NodeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].outgoing.iter().cloned()
    }
    pub fn edge(&self, from: NodeIndex, to: NodeIndex) -> Option<&Edge> {
        self.edges.get(&(from, to))
    }
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.edges.contains_key(&(from, to)),
            _ => false,
        }
    }
    /// Returns the node's index, inserting it first if it is new.
    pub fn add_node(&mut self, id: N) -> NodeIndex {
        if let Some(node) = self.index_of(&id) {
            return node;
        }
        let node = NodeIndex::new(self.nodes.len());
        self.lookup.insert(id.clone(), node);
        self.nodes.push(Node::new(id));
        node
    }
    /// Adds a directed edge, merging the attributes into an existing edge
    /// between the same ends.
    pub fn add_edge(&mut self, from: N, to: N, attributes: HashMap<String, f64>) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        match self.edges.get_mut(&(from, to)) {
            Some(edge) => edge.attributes.extend(attributes),
            None => {
                self.nodes[from.index()].outgoing.push(to);
                self.edges.insert((from, to), Edge::new((from, to), attributes));
            }
        }
    }
    pub fn add_edges(&mut self, edges: Vec<(N, N, f64)>, key: &str) {
        for (from, to, weight) in edges {
            let mut attributes = HashMap::new();
            attributes.insert(key.to_owned(), weight);
            self.add_edge(from, to, attributes);
        }
    }
    /// Adds every edge in both directions.
    pub fn add_links(&mut self, links: Vec<(N, N, f64)>, key: &str) {
        let reversed = links.iter()
            .map(|(end0, end1, weight)| (end1.clone(), end0.clone(), *weight))
            .collect();
        self.add_edges(links, key);
        self.add_edges(reversed, key);
    }
    /// Detaches an edge, returning its position among `from`'s outgoings.
    pub(crate) fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex)
        -> Option<(usize, Edge)> {
        let outgoing = &mut self.nodes[from.index()].outgoing;
        let position = outgoing.iter().position(|&n| n == to)?;
        let edge = self.edges.remove(&(from, to))?;
        outgoing.remove(position);
        Some((position, edge))
    }
    pub(crate) fn insert_edge_at(&mut self, position: usize, edge: Edge) {
        let (from, to) = edge.ends;
        let outgoing = &mut self.nodes[from.index()].outgoing;
        debug_assert!(!outgoing.contains(&to));
        outgoing.insert(position.min(outgoing.len()), to);
        self.edges.insert((from, to), edge);
    }
    pub fn describe_edge(&self, from: NodeIndex, to: NodeIndex) -> String {
        format!("{:?}->{:?}", self.node_id(from), self.node_id(to))
    }
}

impl<N: NodeId + fmt::Display> fmt::Display for Network<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.iter() {
            let neighbors = node.outgoing.iter()
                .map(|&n| self.node_id(n).to_string())
                .collect::<Vec<_>>();
            writeln!(f, "{} -> [{}]", node.id, neighbors.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn triangle() -> Network<usize> {
        let mut network = Network::new();
        network.add_edges(vec![(0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0)], "weight");
        network
    }
    #[test]
    fn it_lookups_edge_ends() {
        let network = triangle();
        let (n0, n1, n2) = (0.into(), 1.into(), 2.into());
        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.edge(n0, n1).map(Edge::ends), Some((n0, n1)));
        assert_eq!(network.edge(n1, n0), None);
        assert_eq!(network.outgoings(n0).collect::<Vec<_>>(), vec![n1, n2]);
        assert_eq!(network.edge(n0, n2).and_then(|e| e.attribute("weight")), Some(2.0));
    }
    #[test]
    fn it_adds_links_in_both_directions() {
        let mut network = Network::new();
        network.add_links(vec![("a", "b", 1.0)], "weight");
        assert!(network.contains_edge(&"a", &"b"));
        assert!(network.contains_edge(&"b", &"a"));
        assert!(!network.contains_edge(&"a", &"c"));
    }
    #[test]
    fn it_merges_attributes_of_repeated_edges() {
        let mut network = triangle();
        network.add_edges(vec![(0, 1, 7.0)], "length");
        let edge = network.edge(0.into(), 1.into()).unwrap();
        assert_eq!(edge.attribute("weight"), Some(10.0));
        assert_eq!(edge.attribute("length"), Some(7.0));
        assert_eq!(network.outgoings(0.into()).count(), 2);
    }
    #[test]
    fn it_reinserts_edges_in_place() {
        let mut network = triangle();
        let before = network.clone();
        let (position, edge) = network.remove_edge(0.into(), 1.into()).unwrap();
        assert_eq!(position, 0);
        assert_ne!(network, before);
        assert!(network.remove_edge(0.into(), 1.into()).is_none());
        network.insert_edge_at(position, edge);
        assert_eq!(network, before);
        assert_eq!(network.outgoings(0.into()).collect::<Vec<_>>(), vec![1.into(), 2.into()]);
    }
}
