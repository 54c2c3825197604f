use miette::Diagnostic;
use thiserror::Error;
use crate::constraint::{Constraint, Instance, Rank};

/// Why a claimed answer does not solve an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Violation {
    #[error("expected {expected} ranks, got {found}")]
    #[diagnostic(code(rankperm::verify::length))]
    Length { expected: usize, found: usize },

    #[error("rank[{vertex}] = {rank} is outside 1..={vertices}")]
    #[diagnostic(code(rankperm::verify::range))]
    OutOfRange { vertex: usize, rank: Rank, vertices: usize },

    #[error("rank {rank} is assigned to both vertex {first} and vertex {second}")]
    #[diagnostic(code(rankperm::verify::duplicate))]
    Duplicate { rank: Rank, first: usize, second: usize },

    #[error(
        "constraint #{index} violated: rank[{}] - rank[{}] = {found}, expected {}",
        .constraint.to, .constraint.from, .constraint.weight
    )]
    #[diagnostic(code(rankperm::verify::constraint))]
    Unsatisfied { index: usize, constraint: Constraint, found: i64 },
}

/// Check that `ranks` is a permutation of `1..=n` satisfying every constraint of `instance`.
///
/// Reports the first problem found, checking shape before constraints.
pub fn verify(instance: &Instance, ranks: &[Rank]) -> Result<(), Violation> {
    let n = instance.vertices;
    if ranks.len() != n {
        return Err(Violation::Length { expected: n, found: ranks.len() });
    }

    // owner[r - 1] is the vertex holding rank r
    let mut owner: Vec<Option<usize>> = vec![None; n];
    for (i, &rank) in ranks.iter().enumerate() {
        let vertex = i + 1;
        if rank == 0 || rank > n {
            return Err(Violation::OutOfRange { vertex, rank, vertices: n });
        }
        if let Some(first) = owner[rank - 1] {
            return Err(Violation::Duplicate { rank, first, second: vertex });
        }
        owner[rank - 1] = Some(vertex);
    }

    for (i, c) in instance.constraints.iter().enumerate() {
        let found = c.difference(ranks);
        if found != c.weight {
            return Err(Violation::Unsatisfied { index: i + 1, constraint: *c, found });
        }
    }

    Ok(())
}
