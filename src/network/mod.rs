mod metric;
mod topology;

use std::fmt::Debug;
use std::hash::Hash;

pub use metric::Metric;
pub use topology::{Edge, Network, NodeIndex};

pub type Path = Vec<NodeIndex>;

/// Anything usable as a node identifier.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}
