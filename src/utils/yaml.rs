use std::fs;
use hashbrown::HashMap;
use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::network::Network;

#[derive(Deserialize)]
struct NetworkYaml {
    #[serde(default)]
    undirected: bool,
    edges: Vec<NetworkEdgeYaml>,
}

#[derive(Deserialize)]
struct NetworkEdgeYaml {
    ends: [String; 2],
    #[serde(default)]
    weights: HashMap<String, f64>,
}

pub fn load_network(path: &str) -> Result<Network<String>> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    parse_network(&text)
}

pub fn parse_network(text: &str) -> Result<Network<String>> {
    let yaml: NetworkYaml = serde_yaml::from_str(text)?;
    let mut network = Network::new();
    for edge in yaml.edges {
        let [end0, end1] = edge.ends;
        if yaml.undirected {
            network.add_edge(end1.clone(), end0.clone(), edge.weights.clone());
        }
        network.add_edge(end0, end1, edge.weights);
    }
    Ok(network)
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))?;
    let yaml = serde_yaml::from_str(&text)?;
    Ok(yaml)
}
