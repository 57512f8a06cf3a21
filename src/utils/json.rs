use std::fs;
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::algorithm::Ranked;
use crate::network::Network;


#[derive(Serialize, Deserialize)]
struct NetworkJson {
    weight: String,
    edges: Vec<(String, String, f64)>,
}


pub fn load_network(filepath: &str) -> Result<Network<String>> {
    let text = fs::read_to_string(filepath)
        .map_err(|err| Error::Io(filepath.to_owned(), err))?;
    parse_network(&text)
}

pub fn parse_network(text: &str) -> Result<Network<String>> {
    let json: NetworkJson = serde_json::from_str(text)?;
    let mut graph = Network::new();
    graph.add_edges(json.edges, &json.weight);
    Ok(graph)
}

pub fn dump_ranked(ranked: &Ranked<String>) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranked)?)
}


#[cfg(test)]
mod test {
    use super::{dump_ranked, parse_network};
    use crate::algorithm::Ranked;
    #[test]
    fn test_parse_network() {
        let graph = parse_network(r#"{
            "weight": "length",
            "edges": [["C", "D", 3.0], ["C", "E", 2], ["E", "D", 1]]
        }"#).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let (c, d) = (graph.index_of(&"C".to_owned()).unwrap(), graph.index_of(&"D".to_owned()).unwrap());
        assert_eq!(graph.edge(c, d).and_then(|e| e.attribute("length")), Some(3.0));
    }
    #[test]
    fn test_dump_ranked() {
        let ranked = Ranked::new(vec![(5.0, vec!["C".to_owned(), "H".to_owned()])], true);
        let text = dump_ranked(&ranked).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["weights"][0], 5.0);
        assert_eq!(value["paths"][0][1], "H");
    }
}
