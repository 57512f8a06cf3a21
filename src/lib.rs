pub mod algorithm;
pub mod network;
pub mod utils;

pub use algorithm::{Acceptance, Ranked, Yens};
pub use network::{Network, NodeId};
pub use utils::error::{Error, Result};

/// Ranks up to `k` loopless paths from `source` to `target` under the
/// default acceptance policy. See [`Yens::compute`].
pub fn k_shortest_paths<N: NodeId>(graph: &mut Network<N>, source: &N, target: &N,
                                   k: usize, weight: &str, all: bool) -> Result<Ranked<N>> {
    Yens::default().compute(graph, source, target, k, weight, all)
}
