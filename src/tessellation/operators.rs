//! Genetic operators over polygon lists.
//!
//! Both operators build a new list and leave their inputs untouched.
//!
//! - [`crossover`]: prefix of one parent, then the other parent's polygons
//!   not already in that prefix
//! - [`split_mutation`]: cut one polygon in two
//!
//! Neither operator repairs coverage. Offspring can miss points or list a
//! point in more than one polygon.

use super::types::Polygon;
use rand::Rng;

/// Prefix crossover.
///
/// Picks a cut `s` uniformly in `1..=len(parent1) - 1` (or `s = 1` when
/// `parent1` has at most one polygon), keeps `parent1[..s]`, then appends
/// every polygon of `parent2`, in order, that is not exactly equal to one in
/// that prefix.
pub fn crossover<R: Rng>(parent1: &[Polygon], parent2: &[Polygon], rng: &mut R) -> Vec<Polygon> {
    let split = if parent1.len() > 1 {
        rng.random_range(1..parent1.len())
    } else {
        1
    };
    let prefix = &parent1[..split.min(parent1.len())];

    let mut offspring = prefix.to_vec();
    offspring.extend(
        parent2
            .iter()
            .filter(|poly| !prefix.contains(*poly))
            .cloned(),
    );
    offspring
}

/// Split mutation.
///
/// Picks one polygon uniformly. If it has more than three vertices, cuts it
/// at a random position in `1..=len - 2`: the front part takes the chosen
/// polygon's place and the back part is appended to the list. Triangles
/// and empty lists come back unchanged.
///
/// The front part may be shorter than three; it is kept anyway.
pub fn split_mutation<R: Rng>(polygons: &[Polygon], rng: &mut R) -> Vec<Polygon> {
    let mut mutated = polygons.to_vec();
    if mutated.is_empty() {
        return mutated;
    }

    let idx = rng.random_range(0..mutated.len());
    let len = mutated[idx].len();
    if len > 3 {
        let at = rng.random_range(1..=len - 2);
        let (front, back) = mutated[idx].split_at(at);
        log::trace!("split polygon {idx} of {len} vertices at {at}");
        mutated[idx] = front;
        mutated.push(back);
    }
    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashMap;

    fn p(indices: &[usize]) -> Polygon {
        Polygon::from(indices)
    }

    fn multiset(polys: &[Polygon]) -> HashMap<Polygon, usize> {
        let mut m = HashMap::new();
        for poly in polys {
            *m.entry(poly.clone()).or_insert(0) += 1;
        }
        m
    }

    // ---- crossover ----

    #[test]
    fn test_identical_parents_reproduce_parent() {
        let parent = vec![p(&[0, 1, 2]), p(&[3, 4, 5, 6]), p(&[7, 8, 9])];
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let child = crossover(&parent, &parent, &mut rng);
            assert_eq!(multiset(&child), multiset(&parent));
        }
    }

    #[test]
    fn test_prefix_then_unseen_polygons_of_second_parent() {
        let a = vec![p(&[0, 1, 2]), p(&[3, 4, 5]), p(&[6, 7, 8])];
        let b = vec![p(&[6, 7, 8]), p(&[0, 1, 2]), p(&[9, 10, 11])];
        let mut rng = create_rng(7);

        let mut seen = [false; 3];
        for _ in 0..100 {
            let child = crossover(&a, &b, &mut rng);
            let split = (1..a.len())
                .find(|&s| {
                    let expected: Vec<Polygon> = a[..s]
                        .iter()
                        .cloned()
                        .chain(b.iter().filter(|q| !a[..s].contains(*q)).cloned())
                        .collect();
                    expected == child
                })
                .expect("child must be a prefix of parent1 plus the rest of parent2");
            seen[split] = true;
        }
        // cuts are drawn from 1..=len-1
        assert!(!seen[0] && seen[1] && seen[2]);
    }

    #[test]
    fn test_duplicates_across_polygons_are_not_repaired() {
        let a = vec![p(&[0, 1, 2]), p(&[3, 4, 5])];
        let b = vec![p(&[2, 1, 0]), p(&[3, 4, 5])];
        let mut rng = create_rng(1);
        // only s = 1 is possible: [0,1,2] + [2,1,0] + [3,4,5]
        let child = crossover(&a, &b, &mut rng);
        assert_eq!(child, vec![p(&[0, 1, 2]), p(&[2, 1, 0]), p(&[3, 4, 5])]);
    }

    #[test]
    fn test_single_polygon_parent1() {
        let a = vec![p(&[0, 1, 2])];
        let b = vec![p(&[3, 4, 5]), p(&[0, 1, 2])];
        let mut rng = create_rng(3);
        assert_eq!(crossover(&a, &b, &mut rng), vec![p(&[0, 1, 2]), p(&[3, 4, 5])]);
    }

    #[test]
    fn test_empty_parents() {
        let b = vec![p(&[3, 4, 5])];
        let mut rng = create_rng(3);
        assert_eq!(crossover(&[], &b, &mut rng), b);
        assert!(crossover(&[], &[], &mut rng).is_empty());
    }

    // ---- split_mutation ----

    #[test]
    fn test_triangles_are_never_split() {
        let polys = vec![p(&[0, 1, 2]), p(&[3, 4, 5])];
        let mut rng = create_rng(42);
        for _ in 0..50 {
            assert_eq!(split_mutation(&polys, &mut rng), polys);
        }
    }

    #[test]
    fn test_quad_split_positions() {
        let polys = vec![p(&[0, 1, 2, 3])];
        let mut rng = create_rng(42);
        let mut outcomes = std::collections::HashSet::new();
        for _ in 0..100 {
            let m = split_mutation(&polys, &mut rng);
            assert!(
                m == vec![p(&[0]), p(&[1, 2, 3])] || m == vec![p(&[0, 1]), p(&[2, 3])],
                "unexpected split {m:?}"
            );
            outcomes.insert(m);
        }
        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_split_preserves_indices_and_appends() {
        let polys = vec![p(&[0, 1, 2, 3, 4, 5]), p(&[6, 7, 8])];
        let mut rng = create_rng(11);
        for _ in 0..50 {
            let m = split_mutation(&polys, &mut rng);
            let mut before: Vec<usize> = polys.iter().flat_map(|q| q.indices().to_vec()).collect();
            let mut after: Vec<usize> = m.iter().flat_map(|q| q.indices().to_vec()).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
            if m.len() == 3 {
                assert_eq!(m[1], polys[1]);
                let mut joined = m[0].indices().to_vec();
                joined.extend_from_slice(m[2].indices());
                assert_eq!(joined, polys[0].indices());
            } else {
                assert_eq!(m, polys);
            }
        }
    }

    #[test]
    fn test_empty_list_unchanged() {
        let mut rng = create_rng(42);
        assert!(split_mutation(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let polys = vec![p(&[0, 1, 2, 3, 4])];
        let snapshot = polys.clone();
        let mut rng = create_rng(5);
        let _ = split_mutation(&polys, &mut rng);
        assert_eq!(polys, snapshot);
    }
}
