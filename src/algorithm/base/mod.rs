pub mod dijkstra;
pub mod heap;
pub mod suppression;
pub mod yens;
