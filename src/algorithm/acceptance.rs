use std::fmt;
use std::str::FromStr;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::base::heap::MyMinHeap;
use crate::network::Path;
use crate::utils::error::Error;


pub type Candidate = (f64, Path);


/// Rule deciding which candidate of a round becomes the next accepted path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Acceptance {
    LastExceeding,
    RoundMinimum,
    Pooled,
}

impl Default for Acceptance {
    fn default() -> Self {
        Acceptance::LastExceeding
    }
}

impl Acceptance {
    pub fn selector(self) -> SelectorEnum {
        match self {
            Acceptance::LastExceeding => LastExceeding::default().into(),
            Acceptance::RoundMinimum  => RoundMinimum::default().into(),
            Acceptance::Pooled        => Pooled::default().into(),
        }
    }
}

impl FromStr for Acceptance {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "last-exceeding" => Ok(Acceptance::LastExceeding),
            "round-minimum"  => Ok(Acceptance::RoundMinimum),
            "pooled"         => Ok(Acceptance::Pooled),
            _                => Err(Error::UnknownAcceptance(name.to_owned())),
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Acceptance::LastExceeding => "last-exceeding",
            Acceptance::RoundMinimum  => "round-minimum",
            Acceptance::Pooled        => "pooled",
        };
        f.write_str(name)
    }
}


#[enum_dispatch]
pub enum SelectorEnum {
    LastExceeding,
    RoundMinimum,
    Pooled,
}

#[enum_dispatch(SelectorEnum)]
pub trait Selector {
    /// Called once per spur path found during the round.
    fn offer(&mut self, weight: f64, path: Path, last: f64);
    /// Ends the round; `None` means the search is exhausted.
    fn take(&mut self, accepted: &[Candidate]) -> Option<Candidate>;
}


/// Keeps the last candidate, in spur order, heavier than the previously
/// accepted path. Lighter or equally heavy candidates are dropped, so the
/// result is not necessarily the lightest alternative.
#[derive(Default)]
pub struct LastExceeding {
    best: Option<Candidate>,
}

impl Selector for LastExceeding {
    fn offer(&mut self, weight: f64, path: Path, last: f64) {
        if weight > last {
            self.best = Some((weight, path));
        }
    }
    fn take(&mut self, _accepted: &[Candidate]) -> Option<Candidate> {
        self.best.take()
    }
}


/// Keeps the lightest candidate of the round that is not lighter than the
/// previously accepted path; the earliest one wins a tie.
#[derive(Default)]
pub struct RoundMinimum {
    best: Option<Candidate>,
}

impl Selector for RoundMinimum {
    fn offer(&mut self, weight: f64, path: Path, last: f64) {
        if weight < last { return }
        match &self.best {
            Some((best, _)) if *best <= weight => {},
            _ => self.best = Some((weight, path)),
        }
    }
    fn take(&mut self, _accepted: &[Candidate]) -> Option<Candidate> {
        self.best.take()
    }
}


/// Yen's candidate pool: every spur path stays available to later rounds
/// and each round accepts the lightest one.
pub struct Pooled {
    heap: MyMinHeap<Path>,
}

impl Default for Pooled {
    fn default() -> Self {
        Pooled { heap: MyMinHeap::new() }
    }
}

impl Selector for Pooled {
    fn offer(&mut self, weight: f64, path: Path, _last: f64) {
        if self.heap.get(&path).is_none() {
            self.heap.push(path, weight.into());
        }
    }
    fn take(&mut self, accepted: &[Candidate]) -> Option<Candidate> {
        while let Some((path, weight)) = self.heap.pop() {
            if accepted.iter().all(|(_, p)| *p != path) {
                return Some((weight.into(), path));
            }
        }
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NodeIndex;
    fn path(nodes: &[usize]) -> Path {
        nodes.iter().map(|&n| NodeIndex::from(n)).collect()
    }
    #[test]
    fn it_parses_policy_names() {
        assert_eq!("pooled".parse::<Acceptance>().unwrap(), Acceptance::Pooled);
        assert_eq!("round-minimum".parse::<Acceptance>().unwrap(), Acceptance::RoundMinimum);
        assert_eq!(Acceptance::default().to_string(), "last-exceeding");
        assert!(matches!("fastest".parse::<Acceptance>(), Err(Error::UnknownAcceptance(_))));
    }
    #[test]
    fn it_keeps_the_last_exceeding_candidate() {
        let mut selector = Acceptance::LastExceeding.selector();
        selector.offer(8.0, path(&[0, 3, 9]), 5.0);
        selector.offer(7.0, path(&[0, 1, 9]), 5.0);
        selector.offer(5.0, path(&[0, 2, 9]), 5.0);
        selector.offer(4.0, path(&[0, 4, 9]), 5.0);
        assert_eq!(selector.take(&[]), Some((7.0, path(&[0, 1, 9]))));
        assert_eq!(selector.take(&[]), None);
    }
    #[test]
    fn it_keeps_the_round_minimum() {
        let mut selector = Acceptance::RoundMinimum.selector();
        selector.offer(8.0, path(&[0, 3, 9]), 5.0);
        selector.offer(5.0, path(&[0, 1, 9]), 5.0);
        selector.offer(5.0, path(&[0, 2, 9]), 5.0);
        selector.offer(4.0, path(&[0, 4, 9]), 5.0);
        assert_eq!(selector.take(&[]), Some((5.0, path(&[0, 1, 9]))));
        assert_eq!(selector.take(&[]), None);
    }
    #[test]
    fn it_pools_candidates_across_rounds() {
        let mut selector = Acceptance::Pooled.selector();
        let accepted = vec![(1.0, path(&[0, 9]))];
        selector.offer(8.0, path(&[0, 3, 9]), 1.0);
        selector.offer(6.0, path(&[0, 1, 9]), 1.0);
        selector.offer(6.0, path(&[0, 1, 9]), 1.0);
        assert_eq!(selector.take(&accepted), Some((6.0, path(&[0, 1, 9]))));
        selector.offer(1.0, path(&[0, 9]), 6.0);
        assert_eq!(selector.take(&accepted), Some((8.0, path(&[0, 3, 9]))));
        assert_eq!(selector.take(&accepted), None);
    }
}
