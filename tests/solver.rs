use miette::Result as MResult;
use rankperm::{
    propagate::{self, Propagation},
    solve, solve_instance, verify::verify, Constraint, Instance, Permutation,
};

fn answer(vertices: usize, constraints: &[Constraint]) -> Option<Vec<usize>> {
    solve(vertices, constraints).map(Permutation::into_ranks)
}

/// All permutations of `1..=n` in lexicographic order, built by choosing the smallest unused
/// rank first. Independent of `Permutation::advance`.
fn all_rankings(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for rank in 1..=used.len() {
            if !used[rank - 1] {
                used[rank - 1] = true;
                prefix.push(rank);
                extend(prefix, used, out);
                prefix.pop();
                used[rank - 1] = false;
            }
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

fn satisfies(ranks: &[usize], constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| {
        ranks[c.to.id() - 1] as i64 - ranks[c.from.id() - 1] as i64 == c.weight
    })
}

fn reference(n: usize, constraints: &[Constraint]) -> Option<Vec<usize>> {
    all_rankings(n).into_iter().find(|r| satisfies(r, constraints))
}

/// Constraint sets to throw at the solvers: a few structured shapes planted on `ranks`, each
/// also with its last weight nudged so it usually becomes unsatisfiable.
fn instances_for(ranks: &[usize]) -> Vec<Vec<Constraint>> {
    let n = ranks.len();
    let diff = |u: usize, v: usize| ranks[v - 1] as i64 - ranks[u - 1] as i64;
    let mut shapes: Vec<Vec<Constraint>> = vec![
        (1..n).map(|u| Constraint::new(u, u + 1, diff(u, u + 1))).collect(),
        (2..=n).map(|v| Constraint::new(1, v, diff(1, v))).collect(),
        (1..n).map(|u| Constraint::new(n, u, diff(n, u))).collect(),
        (1..n).step_by(2).map(|u| Constraint::new(u, u + 1, diff(u, u + 1))).collect(),
    ];
    let nudged: Vec<Vec<Constraint>> = shapes
        .iter()
        .filter(|cs| !cs.is_empty())
        .map(|cs| {
            let mut cs = cs.clone();
            if let Some(last) = cs.last_mut() {
                last.weight += 1;
            }
            cs
        })
        .collect();
    shapes.extend(nudged);
    shapes
}

#[test]
fn documented_scenarios() {
    assert_eq!(answer(2, &[Constraint::new(1, 2, 1)]), Some(vec![1, 2]));
    assert_eq!(
        answer(3, &[Constraint::new(1, 2, 1), Constraint::new(2, 3, 1)]),
        Some(vec![1, 2, 3]),
    );
    assert_eq!(answer(2, &[Constraint::new(1, 2, 0)]), None);
    assert_eq!(
        answer(3, &[
            Constraint::new(1, 2, 1),
            Constraint::new(2, 3, 1),
            Constraint::new(1, 3, 1),
        ]),
        None,
    );
    assert_eq!(answer(1, &[]), Some(vec![1]));
    assert_eq!(answer(4, &[]), Some(vec![1, 2, 3, 4]));
}

#[test]
fn star_graph() {
    let cs = [
        Constraint::new(1, 2, -3),
        Constraint::new(1, 3, 4),
        Constraint::new(1, 4, -1),
        Constraint::new(1, 5, 3),
        Constraint::new(1, 6, -2),
        Constraint::new(1, 7, 2),
        Constraint::new(1, 8, 1),
    ];
    assert_eq!(answer(8, &cs), Some(vec![4, 1, 8, 3, 7, 2, 6, 5]));
}

#[test]
fn deterministic() {
    let cs = [Constraint::new(2, 4, 2), Constraint::new(3, 1, -1)];
    let first = answer(5, &cs);
    for _ in 0..5 {
        assert_eq!(answer(5, &cs), first);
    }
}

#[test]
fn matches_independent_enumeration() -> MResult<()> {
    for n in 1..=5 {
        for planted in all_rankings(n) {
            for cs in instances_for(&planted) {
                let found = answer(n, &cs);
                assert_eq!(found, reference(n, &cs), "n = {}, constraints = {:?}", n, cs);
                if let Some(ranks) = &found {
                    verify(&Instance::new(n, cs.iter().copied())?, ranks)?;
                }
            }
        }
    }
    Ok(())
}

#[test]
fn agrees_with_propagation_on_connected_instances() -> MResult<()> {
    for n in 1..=6 {
        for planted in all_rankings(n) {
            // the first three shapes are spanning trees
            for cs in instances_for(&planted).into_iter().filter(|cs| cs.len() + 1 == n) {
                let instance = Instance::new(n, cs.iter().copied())?;
                let brute = solve_instance(&instance);
                match propagate::solve(&instance) {
                    Propagation::Ranked(p) => assert_eq!(brute, Some(p)),
                    Propagation::Inconsistent | Propagation::NotAPermutation => {
                        assert_eq!(brute, None, "constraints = {:?}", cs)
                    },
                    Propagation::Underdetermined { components } => {
                        panic!("{} components in a spanning tree", components)
                    },
                }
            }
        }
    }
    Ok(())
}

#[test]
fn disconnected_instances_are_left_to_search() -> MResult<()> {
    // {1, 2} must be adjacent ranks with 1 above, {3, 4} three apart
    let instance = Instance::new(4, [Constraint::new(2, 1, 1), Constraint::new(3, 4, 3)])?;
    assert_eq!(
        propagate::solve(&instance),
        Propagation::Underdetermined { components: 2 },
    );
    assert_eq!(solve_instance(&instance).map(Permutation::into_ranks), Some(vec![3, 2, 1, 4]));
    Ok(())
}
