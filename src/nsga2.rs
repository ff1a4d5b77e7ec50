//! Fast non-dominated sorting, crowding distance, binary tournament
//! selection, and elitist (mu+lambda) truncation. Operates purely on
//! objective vectors and index sets; knows nothing about [`crate::model`].

use rand::Rng;

use crate::objective::Objectives;

/// `front[i]` is the set of indices (into the input slice) at rank `i`.
/// Fronts partition `0..objectives.len()` exactly: every index appears in
/// exactly one front, and front 0 holds the non-dominated individuals.
pub fn fast_non_dominated_sort(objectives: &[Objectives]) -> Vec<Vec<usize>> {
    let n = objectives.len();
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if objectives[i].dominates(&objectives[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if objectives[j].dominates(&objectives[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        fronts.push(current);
        current = next;
    }
    fronts
}

/// Per-element rank, derived from [`fast_non_dominated_sort`]'s fronts:
/// `rank[i]` is the index of the front containing `i`.
pub fn ranks_from_fronts(fronts: &[Vec<usize>], n: usize) -> Vec<usize> {
    let mut rank = vec![0usize; n];
    for (r, front) in fronts.iter().enumerate() {
        for &i in front {
            rank[i] = r;
        }
    }
    rank
}

/// Crowding distance of every member of one front, indexed the same as
/// `front` (not the same as the global population index).
///
/// `m <= 2` members each receive `f64::INFINITY`. Otherwise every objective
/// axis is sorted independently; the two extremes on that axis receive
/// `f64::INFINITY`, interior members accumulate `(next-prev)/(max-min)`. An
/// axis with zero range contributes 0 to every member on that axis (extremes
/// keep whatever `+inf` they already earned from another axis).
pub fn crowding_distance(front: &[usize], objectives: &[Objectives]) -> Vec<f64> {
    let m = front.len();
    if m <= 2 {
        return vec![f64::INFINITY; m];
    }

    let mut distance = vec![0.0f64; m];
    for axis in 0..Objectives::DIM {
        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by(|&a, &b| {
            objectives[front[a]][axis].partial_cmp(&objectives[front[b]][axis]).unwrap()
        });

        distance[order[0]] = f64::INFINITY;
        distance[order[m - 1]] = f64::INFINITY;

        let min = objectives[front[order[0]]][axis];
        let max = objectives[front[order[m - 1]]][axis];
        let range = max - min;
        if range <= 0.0 {
            continue;
        }

        for k in 1..(m - 1) {
            if distance[order[k]].is_infinite() {
                continue;
            }
            let prev = objectives[front[order[k - 1]]][axis];
            let next = objectives[front[order[k + 1]]][axis];
            distance[order[k]] += (next - prev) / range;
        }
    }
    distance
}

/// Crowding distance for every member of the population, front by front.
/// `fronts[r][k]`'s distance lands at `result[fronts[r][k]]`.
pub fn crowding_distances_for_all(fronts: &[Vec<usize>], objectives: &[Objectives]) -> Vec<f64> {
    let n: usize = fronts.iter().map(|f| f.len()).sum();
    let mut out = vec![0.0f64; n];
    for front in fronts {
        let d = crowding_distance(front, objectives);
        for (k, &i) in front.iter().enumerate() {
            out[i] = d[k];
        }
    }
    out
}

/// Binary tournament: sample two distinct indices in `0..rank.len()`
/// uniformly, prefer lower rank, break rank ties by higher crowding
/// distance, and break a remaining tie by always keeping the second
/// sample (deterministic, documented per spec.md §9).
pub fn tournament_select(rank: &[usize], crowding: &[f64], rng: &mut impl Rng) -> usize {
    let n = rank.len();
    assert!(n >= 2, "tournament selection requires at least 2 candidates");
    let a = rng.gen_range(0..n);
    let mut b = rng.gen_range(0..n);
    while b == a {
        b = rng.gen_range(0..n);
    }

    if rank[a] != rank[b] {
        return if rank[a] < rank[b] { a } else { b };
    }
    if crowding[a] != crowding[b] {
        return if crowding[a] > crowding[b] { a } else { b };
    }
    b
}

/// Elitist (mu+lambda) truncation: admit whole fronts, in rank order, until
/// admitting the next would exceed `target`; fill the remainder from the
/// boundary front by descending crowding distance. Returns the admitted
/// global indices, length exactly `target` (assuming `objectives.len() >=
/// target`).
pub fn truncate(objectives: &[Objectives], target: usize) -> Vec<usize> {
    let fronts = fast_non_dominated_sort(objectives);
    let mut admitted = Vec::with_capacity(target);

    for front in &fronts {
        if admitted.len() + front.len() <= target {
            admitted.extend_from_slice(front);
            if admitted.len() == target {
                return admitted;
            }
            continue;
        }

        let remaining = target - admitted.len();
        let distances = crowding_distance(front, objectives);
        let mut order: Vec<usize> = (0..front.len()).collect();
        order.sort_by(|&a, &b| distances[b].partial_cmp(&distances[a]).unwrap());
        admitted.extend(order.into_iter().take(remaining).map(|k| front[k]));
        return admitted;
    }
    admitted
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn obj(t: f64, a: f64, w: f64) -> Objectives {
        Objectives::new(t, a, w)
    }

    #[test]
    fn sort_worked_example_dominance() {
        // spec.md §8 scenario 4.
        let objectives = vec![obj(1.0, 1.0, 1.0), obj(2.0, 2.0, 2.0), obj(1.0, 2.0, 0.0)];
        let fronts = fast_non_dominated_sort(&objectives);
        assert_eq!(fronts.len(), 2);
        let mut front0 = fronts[0].clone();
        front0.sort();
        assert_eq!(front0, vec![0, 2]);
        assert_eq!(fronts[1], vec![1]);
    }

    #[test]
    fn fronts_partition_every_index_exactly_once() {
        let objectives =
            vec![obj(1.0, 5.0, 2.0), obj(2.0, 1.0, 9.0), obj(3.0, 3.0, 3.0), obj(1.0, 1.0, 1.0), obj(5.0, 5.0, 5.0)];
        let fronts = fast_non_dominated_sort(&objectives);
        let mut seen: Vec<usize> = fronts.iter().flatten().cloned().collect();
        seen.sort();
        assert_eq!(seen, (0..objectives.len()).collect::<Vec<_>>());
    }

    #[test]
    fn crowding_two_or_fewer_is_infinite() {
        let objectives = vec![obj(1.0, 1.0, 1.0), obj(2.0, 2.0, 2.0)];
        let d = crowding_distance(&[0, 1], &objectives);
        assert!(d.iter().all(|x| x.is_infinite()));
    }

    #[test]
    fn crowding_four_member_front_matches_worked_example() {
        // spec.md §8 scenario 5: objective 1 = [0,1,2,10], objective 2 = [10,2,1,0],
        // objective 3 constant.
        let objectives = vec![
            obj(0.0, 10.0, 5.0),
            obj(1.0, 2.0, 5.0),
            obj(2.0, 1.0, 5.0),
            obj(10.0, 0.0, 5.0),
        ];
        let front: Vec<usize> = (0..4).collect();
        let d = crowding_distance(&front, &objectives);
        assert!(d[0].is_infinite());
        assert!(d[3].is_infinite());
        // interior members 1, 2: axis1 range 10, axis2 range 10, axis3 contributes 0.
        let expected_1 = (2.0 - 0.0) / 10.0 + (1.0 - 0.0) / 10.0;
        let expected_2 = (10.0 - 1.0) / 10.0 + (10.0 - 2.0) / 10.0;
        assert!((d[1] - expected_1).abs() < 1e-9);
        assert!((d[2] - expected_2).abs() < 1e-9);
    }

    #[test]
    fn truncation_keeps_exactly_target_and_prefers_lower_rank() {
        let objectives =
            vec![obj(1.0, 1.0, 1.0), obj(2.0, 2.0, 2.0), obj(3.0, 3.0, 3.0), obj(4.0, 4.0, 4.0)];
        let kept = truncate(&objectives, 2);
        assert_eq!(kept.len(), 2);
        assert!(kept.contains(&0));
    }

    #[test]
    fn tournament_never_panics_with_two_candidates() {
        let rank = vec![0, 1];
        let crowding = vec![1.0, 2.0];
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..20 {
            let winner = tournament_select(&rank, &crowding, &mut rng);
            assert_eq!(winner, 0);
        }
    }

    #[test]
    fn tournament_is_deterministic_given_seed() {
        let rank = vec![0, 0, 1, 1];
        let crowding = vec![1.0, 2.0, 3.0, 4.0];
        let mut rng_a = SmallRng::seed_from_u64(11);
        let mut rng_b = SmallRng::seed_from_u64(11);
        let picks_a: Vec<usize> = (0..10).map(|_| tournament_select(&rank, &crowding, &mut rng_a)).collect();
        let picks_b: Vec<usize> = (0..10).map(|_| tournament_select(&rank, &crowding, &mut rng_b)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
