use std::fmt::{Display, Formatter, Result as FmtResult};
use crate::constraint::Rank;

/// A bijection from vertices `1..=n` to ranks `1..=n`, stored 0-based by vertex.
///
/// The only ways to obtain one are [`Permutation::identity`], [`Permutation::new`] (which checks)
/// and [`Permutation::advance`], so the values are always exactly `{1, ..., n}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation(Vec<Rank>);

impl Permutation {
    pub fn new(ranks: impl IntoIterator<Item = Rank>) -> Option<Self> {
        let ranks: Vec<Rank> = ranks.into_iter().collect();
        let n = ranks.len();
        let mut seen = vec![false; n];

        for &rank in &ranks {
            if rank == 0 || rank > n || seen[rank - 1] {
                return None;
            }
            seen[rank - 1] = true;
        }

        Some(Permutation(ranks))
    }

    pub fn identity(size: usize) -> Self {
        Permutation((1..=size).collect())
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }

    pub fn into_ranks(self) -> Vec<Rank> {
        self.0
    }

    /// Step to the next permutation in lexicographic order, in place.
    ///
    /// Returns `false` (leaving `self` untouched) when `self` is already the last, fully
    /// descending permutation.
    pub fn advance(&mut self) -> bool {
        let ranks = &mut self.0;
        if ranks.len() < 2 {
            return false;
        }

        // start of the longest non-increasing suffix
        let mut suffix = ranks.len() - 1;
        while suffix > 0 && ranks[suffix - 1] >= ranks[suffix] {
            suffix -= 1;
        }
        if suffix == 0 {
            return false;
        }

        let pivot = suffix - 1;
        // the suffix is non-increasing, so the rightmost larger element is the smallest one
        let mut successor = ranks.len() - 1;
        while ranks[successor] <= ranks[pivot] {
            successor -= 1;
        }

        ranks.swap(pivot, successor);
        ranks[suffix..].reverse();
        true
    }
}

impl Display for Permutation {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let mut ranks = self.0.iter();
        if let Some(first) = ranks.next() {
            first.fmt(f)?;
            for rank in ranks {
                write!(f, " {}", rank)?;
            }
        }
        Ok(())
    }
}
