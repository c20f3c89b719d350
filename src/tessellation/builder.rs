//! Greedy random tessellation builder.

use super::types::{vertices_of, Polygon, Tessellation};
use crate::geometry::{is_convex, Point};
use rand::Rng;

/// Smallest group the builder tries.
pub const MIN_GROUP_SIZE: usize = 3;

/// Largest group the builder tries.
pub const MAX_GROUP_SIZE: usize = 6;

/// Returns `true` if `indices`, in order, form a convex loop over `points`.
pub fn is_valid_polygon(points: &[Point], indices: &[usize]) -> bool {
    is_convex(&vertices_of(points, indices))
}

/// Greedily cuts `permutation` into convex polygons.
///
/// While more than three indices remain, takes the next `k` of them with
/// `k` drawn uniformly from `3..=min(6, remaining)`. A convex group is kept
/// and consumed; the first non-convex group ends the loop without
/// backtracking. Whatever remains afterwards becomes one last polygon if it
/// has at least three indices and is convex, and is dropped otherwise.
///
/// The polygons, concatenated, always form a prefix of `permutation`.
/// Diversity comes from the permutation; the builder never searches.
pub fn create_random_tessellation<R: Rng>(
    points: &[Point],
    permutation: &[usize],
    rng: &mut R,
) -> Tessellation {
    let mut polygons = Vec::new();
    let mut rest = permutation;

    while rest.len() > MIN_GROUP_SIZE {
        let size = rng.random_range(MIN_GROUP_SIZE..=rest.len().min(MAX_GROUP_SIZE));
        let (group, tail) = rest.split_at(size);
        if !is_valid_polygon(points, group) {
            break;
        }
        polygons.push(Polygon::from(group));
        rest = tail;
    }

    if rest.len() >= MIN_GROUP_SIZE && is_valid_polygon(points, rest) {
        polygons.push(Polygon::from(rest));
    }

    Tessellation::new(polygons)
}
