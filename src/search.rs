//! Exhaustive search over all rank permutations.
//!
//! Candidates are visited in increasing lexicographic order starting at the identity, so the
//! first one that satisfies every constraint is also the lexicographically smallest. This is
//! `O(n! * m)` and meant for small `n`; [`crate::propagate`] is the fast path for checking it.
use log::{debug, trace};
use crate::constraint::{Constraint, Instance};
use crate::permutation::Permutation;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate permutations tested, including the accepted one.
    pub candidates: u64,
    /// Individual constraint evaluations across all candidates.
    pub checks: u64,
}

/// First failing constraint for `candidate`, or `None` if all of them hold.
fn first_violation<'a>(
    candidate: &Permutation,
    constraints: &'a [Constraint],
    stats: &mut SearchStats,
) -> Option<&'a Constraint> {
    let ranks = candidate.ranks();
    constraints.iter().find(|c| {
        stats.checks += 1;
        !c.is_satisfied_by(ranks)
    })
}

/// Like [`solve`], also reporting how much work the search did.
///
/// Every constraint endpoint must be in `1..=vertices`; [`Instance::new`] guarantees this.
pub fn solve_with_stats(
    vertices: usize,
    constraints: &[Constraint],
) -> (Option<Permutation>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut candidate = Permutation::identity(vertices);

    loop {
        stats.candidates += 1;
        match first_violation(&candidate, constraints, &mut stats) {
            None => {
                debug!(
                    "accepted {} after {} candidates ({} checks)",
                    candidate, stats.candidates, stats.checks,
                );
                return (Some(candidate), stats);
            },
            Some(c) => trace!("rejected {}: {} fails", candidate, c),
        }

        if !candidate.advance() {
            debug!(
                "exhausted all {} candidates ({} checks) without a solution",
                stats.candidates, stats.checks,
            );
            return (None, stats);
        }
    }
}

/// The lexicographically smallest assignment of ranks `1..=vertices` satisfying every
/// constraint, or `None` if there is none.
pub fn solve(vertices: usize, constraints: &[Constraint]) -> Option<Permutation> {
    solve_with_stats(vertices, constraints).0
}

pub fn solve_instance(instance: &Instance) -> Option<Permutation> {
    solve(instance.vertices, &instance.constraints)
}
