//! Collaborator assignment policies
//!
//! The collaborator taking an appointment is picked by a swappable policy
//! so tests can assert deterministic assignment.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use leadflow_domain::Collaborator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the collaborator assigned to the next prospect.
pub trait AssignmentPolicy: Send + Sync {
    /// Pick from the roster; `None` when the roster is empty.
    fn pick<'a>(&self, roster: &'a [Collaborator]) -> Option<&'a Collaborator>;
}

/// Cycles through the roster in order.
#[derive(Debug, Default)]
pub struct RoundRobinPolicy {
    cursor: AtomicUsize,
}

impl RoundRobinPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssignmentPolicy for RoundRobinPolicy {
    fn pick<'a>(&self, roster: &'a [Collaborator]) -> Option<&'a Collaborator> {
        if roster.is_empty() {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % roster.len();
        roster.get(index)
    }
}

/// Uniform random pick from a seeded generator, reproducible per seed.
pub struct SeededRandomPolicy {
    rng: Mutex<StdRng>,
}

impl SeededRandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl AssignmentPolicy for SeededRandomPolicy {
    fn pick<'a>(&self, roster: &'a [Collaborator]) -> Option<&'a Collaborator> {
        if roster.is_empty() {
            return None;
        }
        let mut rng = self.rng.lock().ok()?;
        roster.get(rng.gen_range(0..roster.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Collaborator> {
        ["Marie", "Alex", "Inès"]
            .iter()
            .map(|name| Collaborator {
                first_name: (*name).to_string(),
                last_name: "Pro".to_string(),
                email: format!("{}@agency.example", name.to_lowercase()),
            })
            .collect()
    }

    #[test]
    fn round_robin_cycles_in_roster_order() {
        let roster = roster();
        let policy = RoundRobinPolicy::new();

        let picks: Vec<_> =
            (0..6).map(|_| policy.pick(&roster).unwrap().first_name.clone()).collect();
        assert_eq!(picks, ["Marie", "Alex", "Inès", "Marie", "Alex", "Inès"]);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let roster = roster();
        let first = SeededRandomPolicy::new(7);
        let second = SeededRandomPolicy::new(7);

        for _ in 0..10 {
            assert_eq!(
                first.pick(&roster).unwrap().email,
                second.pick(&roster).unwrap().email
            );
        }
    }

    #[test]
    fn empty_roster_yields_none() {
        assert!(RoundRobinPolicy::new().pick(&[]).is_none());
        assert!(SeededRandomPolicy::new(0).pick(&[]).is_none());
    }
}
