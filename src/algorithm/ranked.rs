use serde::Serialize;


/// Outcome of a k-shortest-paths query, lightest path first.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ranked<N> {
    /// Only the last accepted path.
    Kth { weight: f64, path: Vec<N> },
    /// Every accepted path, `paths[j]` weighing `weights[j]`.
    All { weights: Vec<f64>, paths: Vec<Vec<N>> },
}

impl<N: Clone> Ranked<N> {
    /// Packs accepted paths. Without `all` the last path is kept alone; an
    /// empty ranking stays an empty `All` since it has no last path.
    pub(crate) fn new(mut ranked: Vec<(f64, Vec<N>)>, all: bool) -> Self {
        match ranked.pop() {
            Some((weight, path)) if !all => Ranked::Kth { weight, path },
            last => {
                ranked.extend(last);
                let (weights, paths) = ranked.into_iter().unzip();
                Ranked::All { weights, paths }
            }
        }
    }
    pub fn len(&self) -> usize {
        match self {
            Ranked::Kth { .. } => 1,
            Ranked::All { paths, .. } => paths.len(),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn weights(&self) -> Vec<f64> {
        match self {
            Ranked::Kth { weight, .. } => vec![*weight],
            Ranked::All { weights, .. } => weights.clone(),
        }
    }
    pub fn paths(&self) -> Vec<Vec<N>> {
        match self {
            Ranked::Kth { path, .. } => vec![path.clone()],
            Ranked::All { paths, .. } => paths.clone(),
        }
    }
    pub fn pairs(&self) -> Vec<(f64, &Vec<N>)> {
        match self {
            Ranked::Kth { weight, path } => vec![(*weight, path)],
            Ranked::All { weights, paths } => {
                weights.iter().copied().zip(paths.iter()).collect()
            }
        }
    }
    /// The heaviest path of the ranking.
    pub fn last(&self) -> Option<(f64, &Vec<N>)> {
        self.pairs().pop()
    }
}


#[cfg(test)]
mod tests {
    use super::Ranked;
    #[test]
    fn it_packs_by_flag() {
        let ranked = vec![(1.0, vec!['a', 'b']), (2.0, vec!['a', 'c', 'b'])];
        let all = Ranked::new(ranked.clone(), true);
        assert_eq!(all.len(), 2);
        assert_eq!(all.weights(), vec![1.0, 2.0]);
        assert_eq!(all.last(), Some((2.0, &vec!['a', 'c', 'b'])));
        let kth = Ranked::new(ranked, false);
        assert_eq!(kth, Ranked::Kth { weight: 2.0, path: vec!['a', 'c', 'b'] });
        assert_eq!(kth.pairs(), all.pairs()[1..].to_vec());
    }
    #[test]
    fn it_never_invents_a_path() {
        let kth = Ranked::<char>::new(vec![], false);
        assert!(kth.is_empty());
        assert_eq!(kth.last(), None);
    }
    #[test]
    fn it_serializes_untagged() {
        let kth = Ranked::new(vec![(3.0, vec!["x", "y"])], false);
        let json = serde_json::to_string(&kth).unwrap();
        assert_eq!(json, r#"{"weight":3.0,"path":["x","y"]}"#);
        let all = Ranked::new(vec![(3.0, vec!["x", "y"])], true);
        let json = serde_json::to_string(&all).unwrap();
        assert_eq!(json, r#"{"weights":[3.0],"paths":[["x","y"]]}"#);
    }
}
