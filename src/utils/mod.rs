pub mod config;
pub mod error;
pub mod json;
pub mod yaml;

use std::path::Path;

use crate::network::Network;
use error::Result;

/// Loads a network, choosing the format by file extension.
pub fn load_network(path: &str) -> Result<Network<String>> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("json") => json::load_network(path),
        _            => yaml::load_network(path),
    }
}
