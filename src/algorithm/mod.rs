mod base;
mod acceptance;
mod ranked;

pub use acceptance::{Acceptance, Candidate, Selector, SelectorEnum};
pub use base::dijkstra::{shortest_path, Dijkstra};
pub use base::suppression::Suppression;
pub use base::yens::Yens;
pub use ranked::Ranked;
