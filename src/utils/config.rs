use serde::Deserialize;
use argh::FromArgs;

use crate::algorithm::Acceptance;

/// Ranks the K shortest loopless paths between two nodes of a network
#[derive(FromArgs)]
pub struct Arguments {
    /// network file, json or yaml
    #[argh(positional)]
    pub network: String,
    /// node where every path starts
    #[argh(positional)]
    pub source: String,
    /// node where every path ends
    #[argh(positional)]
    pub target: String,
    /// path to configuration file
    #[argh(option, short='c')]
    pub config: Option<String>,
    /// override number of paths to rank
    #[argh(option, short='k')]
    pub k: Option<usize>,
    /// override edge attribute used as weight, empty counts hops
    #[argh(option, short='w')]
    pub weight: Option<String>,
    /// override acceptance policy: last-exceeding, round-minimum or pooled
    #[argh(option, short='a')]
    pub acceptance: Option<Acceptance>,
    /// print every ranked path instead of only the k-th
    #[argh(switch)]
    pub all: bool,
    /// print the ranking as json
    #[argh(switch)]
    pub json: bool,
}

/// Query settings; missing keys fall back to `Config::default()`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub k: usize,
    /// empty selects hop counting
    pub weight: String,
    pub all: bool,
    pub acceptance: Acceptance,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            k: 1,
            weight: String::from("weight"),
            all: false,
            acceptance: Acceptance::default(),
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(k) = args.k {
            self.k = k;
        }
        if let Some(weight) = &args.weight {
            self.weight = weight.clone();
        }
        if let Some(acceptance) = args.acceptance {
            self.acceptance = acceptance;
        }
        if args.all {
            self.all = true;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{Arguments, Config};
    use crate::algorithm::Acceptance;
    use argh::FromArgs;
    #[test]
    fn it_overrides_from_args() {
        let args = Arguments::from_args(&["kshortest"], &[
            "net.yaml", "C", "H", "-k", "4", "-w", "", "-a", "pooled", "--all",
        ]).unwrap();
        let mut config = Config::default();
        config.override_from_args(&args);
        assert_eq!(config.k, 4);
        assert_eq!(config.weight, "");
        assert_eq!(config.acceptance, Acceptance::Pooled);
        assert!(config.all);
        assert_eq!(args.config, None);
        assert!(!args.json);
    }
    #[test]
    fn it_keeps_config_without_overrides() {
        let args = Arguments::from_args(&["kshortest"], &["net.json", "a", "b"]).unwrap();
        let mut config = Config { k: 3, ..Config::default() };
        config.override_from_args(&args);
        assert_eq!(config, Config { k: 3, ..Config::default() });
    }
    #[test]
    fn it_rejects_unknown_policies() {
        let args = Arguments::from_args(&["kshortest"], &["net.json", "a", "b", "-a", "fastest"]);
        assert!(args.is_err());
    }
}
