use std::fmt::{Display, Formatter, Result as FmtResult};
use miette::{Result as MResult, ensure};

/// A rank, `1..=n`.
pub type Rank = usize;

/// A 1-based vertex id, as it appears in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex(usize);

impl Vertex {
    /// Use [`Vertex::checked`] for untrusted ids.
    ///
    /// # Panics
    ///
    /// If `id` is `0`.
    pub fn new(id: usize) -> Self {
        assert!(id >= 1, "vertex ids are 1-based");
        Vertex(id)
    }

    pub fn checked(id: i64, vertices: usize) -> Option<Self> {
        if id >= 1 && (id as u64) <= vertices as u64 {
            Some(Vertex(id as usize))
        } else {
            None
        }
    }

    pub fn id(self) -> usize {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        self.0.fmt(f)
    }
}

/// `rank(to) - rank(from) = weight`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: i64,
}

impl Constraint {
    /// # Panics
    ///
    /// If `from` or `to` is `0`, as [`Vertex::new`].
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Constraint {
            from: Vertex::new(from),
            to: Vertex::new(to),
            weight,
        }
    }

    /// Both endpoints must index into `ranks`.
    pub fn difference(&self, ranks: &[Rank]) -> i64 {
        ranks[self.to.index()] as i64 - ranks[self.from.index()] as i64
    }

    pub fn is_satisfied_by(&self, ranks: &[Rank]) -> bool {
        self.difference(ranks) == self.weight
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{} {} {}", self.from, self.to, self.weight)
    }
}

/// A problem instance: `vertices` vertices and the constraints between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    pub vertices: usize,
    pub constraints: Vec<Constraint>,
}

impl Instance {
    pub fn new(vertices: usize, constraints: impl IntoIterator<Item = Constraint>) -> MResult<Self> {
        let constraints: Vec<Constraint> = constraints.into_iter().collect();
        for (i, c) in constraints.iter().enumerate() {
            ensure!(
                c.from.id() <= vertices && c.to.id() <= vertices,
                "constraint #{} ({}) references a vertex outside 1..={}",
                i + 1,
                c,
                vertices,
            );
        }
        Ok(Instance { vertices, constraints })
    }
}
